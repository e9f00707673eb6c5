//! 门户各屏的文案，均为 Telegram HTML 格式

use teloxide::utils::html::{code_inline, link};

use super::plan::{Guide, Plan};

pub const MAIN_MENU: &str = "Welcome to Tnetc, fam!

Founded by pro traders with 10+ years of experience delivering top-tier signals and tools.

<b>OUR SERVICES:</b>

🔥 <b>10X CHALLENGE COMMUNITY</b>
- Limited to 100 slots
- Copy trading challenge to 10x your account
- Previous result: x10 in 66 days

📈 <b>COPYTRADE SIGNALS</b>
- Copy trade us on Puprime
- 1-on-1 setup and weekly reports
- No trading knowledge needed

💎 <b>VIP SIGNAL CALLS</b>
- 1-on-1 signal guidance
- Exclusive top-tier trader group

⭐ <b>PREMIUM SIGNAL SUBSCRIPTION</b>
- Premium VIP signals plus the EA trading bot (80% win rate)
- VIP copy trading and 24/7 support

Last month: FX +40.36% ✅ | GOLD +19.41% ✅
Win Rate: 94% 🚀

Please select a service:";

pub const WELCOME_EA: &str = "Welcome to Tnetc, fam!

You came for our EA trading bot: an automated system with an 80% win rate that trades FX majors and Gold while you sleep.

<b>OUR SERVICES:</b>
🔥 10X Challenge Community, 100 slots only, FREE
📈 Copytrade Signals, $500 value, currently FREE
💎 VIP Signal Calls with 1-on-1 guidance
⭐ Premium Signal Subscription with the EA trading bot

Check the performance results or pick a service to get started:";

pub const WELCOME_SIGNAL: &str = "Welcome to TNETC Premium Signals! 📈

You've discovered our high-performance trading services with:
✅ 94% combined win rate
✅ +40.36% on FX last month
✅ +19.41% on GOLD last month

<b>OUR SERVICES:</b>
🔥 10X Challenge Community, 100 slots only, FREE
📈 Copytrade Signals, we trade for you
💎 VIP Signal Calls with 1-on-1 guidance
⭐ Premium Signal Subscription, signals and automated trading

Select a service to get started:";

pub const WELCOME_VIP: &str = "Welcome to TNETC VIP Trading! 💎

You've discovered our exclusive premium trading services with:
✅ Expert 1-on-1 guidance
✅ VIP copy trading with higher returns
✅ 24/7 VIP support

<b>OUR SERVICES:</b>
🔥 10X Challenge Community, 100 slots only, FREE
📈 Copytrade Signals, we trade for you
💎 VIP Signal Calls with 1-on-1 guidance
⭐ Premium Signal Subscription, our most comprehensive solution

Select a service to get started:";

pub const HELP: &str = "<b>Tnetc portal commands</b>

/start - open the main menu
/menu - show the main menu again
/help - show this message

Use the buttons under each message to browse our services.";

pub const COPYTRADE: &str = "🔥 <b>TNETC Copytrade Signals</b> 🔥

Our Copytrade Plan is perfect for those who want to earn from trading without having to trade themselves.

<b>What's Included:</b>
✅ Copy trade us on Puprime, we handle everything
✅ 1-on-1 account setup support
✅ Weekly performance reports
✅ Perfect for beginners, no trading knowledge needed

<b>Limited Time Offer:</b>
• Regular Price: $500 (lifetime access)
• Current Promotion: FREE!

To get started, contact our support team using the button below.";

pub const VIP_SIGNALS: &str = "💎 <b>TNETC VIP Signal Calls</b> 💎

Trade alongside our professional team with signals delivered straight to the VIP group.

<b>What's Included:</b>
✅ 1-3 daily signals with entry, TP and SL levels
✅ 1-on-1 signal execution guidance
✅ Multi-timeframe analysis on every call
✅ Exclusive VIP trader group
✅ 24/7 VIP support

<b>Last Month:</b> FX +40.36% ✅ | GOLD +19.41% ✅

Contact support to join the VIP group.";

pub const PREMIUM_SIGNALS: &str = "💎 <b>Premium VIP Signal + EA Trading Bot</b> 💎

Our most comprehensive package combining premium VIP signals and our high-performance EA trading bot.

<b>What's Included:</b>
✅ Expert 1-on-1 signal guidance
✅ High-performance EA trading bot (80% win rate)
✅ VIP copy trading with higher returns
✅ 24/7 VIP support
✅ Private VIP-only Telegram group
✅ Advanced entry/exit strategies
✅ Priority notification for market-moving events
✅ Monthly strategy sessions
✅ Regular EA updates and optimization

<b>Premium Package Pricing:</b>
• Monthly: $400/month
• Quarterly: $1000 (Save 16%)
• Annual: $3000 (Save 37%)

To get started with this premium package, contact our support team.";

pub const EA_RESULTS: &str = "📊 <b>TNETC TRADING PERFORMANCE RESULTS</b> 📊

<b>Monthly Performance (Last 3 Months):</b>
• April: +25.3%
• May: +52.3%
• June: +40.36%

<b>Performance by Market:</b>
• Forex: +40.36% ✅
• Gold: +19.41% ✅

<b>Key Performance Metrics:</b>
• Win Rate: 80% for EA, 94% for Signals
• Profit Factor: 3.2
• Average Win/Loss Ratio: 3.5
• Maximum Drawdown: 8.3%

Get these results with our Premium Signal Subscription or take advantage of our FREE 10X Challenge and Copytrade offers!";

pub const EA_STATS: &str = "📊 <b>TNETC EA DETAILED PERFORMANCE</b> 📊

<b>Monthly Performance (Last 6 Months):</b>
• January: +32.7%
• February: +28.4%
• March: +18.1%
• April: +25.3%
• May: +52.3%
• June: +40.36%

<b>Performance by Currency Pair:</b>
• EUR/USD: +29.8%
• GBP/USD: +31.2%
• USD/JPY: +26.7%
• XAU/USD: +19.41%

<b>Key Performance Metrics:</b>
• Win Rate: 80%
• Profit Factor: 3.2
• Average Win/Loss Ratio: 3.5
• Maximum Drawdown: 8.3%
• Recovery Factor: 4.8

Our EA has been consistently profitable across different market conditions.";

pub const EA_HOW_WORKS: &str = "🤖 <b>HOW OUR EA TRADING BOT WORKS</b> 🤖

<b>Trading Strategy:</b>
Our EA uses a proprietary multi-timeframe analysis algorithm that combines:
• Advanced price action patterns
• Key support/resistance levels
• Market structure analysis
• Volatility-based entry/exit timing

<b>Risk Management:</b>
• Fixed 1% risk per trade
• Dynamic stop-loss placement
• Trailing take-profit mechanism
• Anti-drawdown protection

<b>Technical Specifications:</b>
• Compatible with MT4/MT5
• Works with any broker
• Trades FX majors and Gold
• Fully automated, set and forget

<b>Setup Process:</b>
1. We help you set up the EA on your account
2. Configure risk parameters to your preference
3. Regular updates and optimization
4. Ongoing technical support";

pub const EA_PRICING: &str = "📈 <b>TNETC EA Pricing Plans</b>

Choose your preferred plan to start automated trading with our 80% win-rate system.

All plans include:
✅ Full EA setup assistance
✅ 24/7 technical support
✅ Performance monitoring
✅ Regular updates

<b>Monthly Plan:</b> Perfect for trying our system
<b>Quarterly Plan:</b> Our most popular option
<b>Annual Plan:</b> Best value for serious traders
<b>Copytrade Option:</b> We trade for you, no technical setup needed

Select a plan below to get started:";

pub const SIGNAL_RESULTS: &str = "📊 <b>TNETC SIGNAL PERFORMANCE RESULTS</b> 📊

<b>Last Month Performance:</b>
• Forex: +40.36% ✅
• Gold: +19.41% ✅
• Combined Win Rate: 94% 🚀

<b>Signal Frequency:</b>
• 1-3 signals per day
• Each with detailed entry, TP and SL levels
• Multi-timeframe analysis included

<b>Risk Management:</b>
• Recommended 1-2% risk per trade
• Average risk-reward ratio: 1:3
• Detailed trade management instructions

Get our premium signals combined with EA trading in the Premium Signal Subscription!";

pub const VIP_BENEFITS: &str = "💎 <b>PREMIUM VIP SIGNAL + EA TRADING BOT BENEFITS</b> 💎

<b>Exclusive Access:</b>
• Private VIP-only Telegram group
• Direct access to professional traders
• Priority support 24/7

<b>Enhanced Trading:</b>
• Expert 1-on-1 signal guidance
• High-performance EA trading bot (80% win rate)
• VIP-only signals with higher win rates
• Priority notification for market-moving events

<b>Education &amp; Growth:</b>
• Advanced trading documentation
• Monthly strategy sessions
• Performance reviews and optimization

Join our Premium VIP + EA package and elevate your trading to the next level!";

const COPYTRADE_GUIDE: &str = "<b>TNETC Copytrade Setup Guide</b>

<b>Step 1: Create Puprime Account</b>
• Register at Puprime using our referral link
• Complete the verification process
• Fund your account (minimum $500 recommended)

<b>Step 2: Share Account Details</b>
• Provide your Puprime account number to our support team
• Share your read-only password for monitoring

<b>Step 3: Confirm Settings</b>
• Confirm risk parameters with our team
• Set account leverage (1:100 recommended)

<b>Step 4: Start Earning</b>
• Our team handles all trading
• You receive weekly performance reports
• Monitor your account anytime through Puprime

Need help? Our support team is available 24/7.";

const EA_GUIDE: &str = "<b>TNETC EA Setup Guide</b>

<b>Step 1: Prepare Your Trading Account</b>
• Make sure MT4/MT5 is installed
• Create or use a funded account (minimum $1000 recommended)
• Set account leverage (1:100 or higher recommended)

<b>Step 2: Install the EA</b>
• Our team provides the EA file
• Follow our installation instructions
• Place the EA on the correct currency pairs

<b>Step 3: Configure Settings</b>
• Set risk per trade (1% recommended)
• Configure trading sessions
• Set maximum open trades

<b>Step 4: Monitoring &amp; Support</b>
• Regular performance reviews
• 24/7 technical support
• Strategy updates as market conditions change

Need help? Our support team is available 24/7.";

/// 10X 挑战社区，终止页，报名链接直接放在文本里
pub fn join_10x(challenge_url: &str) -> String {
    format!(
        "🔥 <b>10X CHALLENGE COMMUNITY</b> 🔥

• Turn $1K into $10K with our guidance
• Limited to 100 participants
• Normally: $350
• Today: $0

This community includes:
• Special high-return challenge signals
• Expert guidance
• Risk management strategy
• Full documentation

{}",
        link(challenge_url, "👉 Claim your spot in the challenge group")
    )
}

pub fn purchase(plan: Plan, order_code: &str) -> String {
    format!(
        "<b>How to Complete Your {} Purchase</b>

<b>Price: {}</b>

1. Contact our support team with code: {}
2. Our team will provide payment instructions
3. After payment, you'll receive your setup within 24 hours

Questions? Our support team is available 24/7.",
        plan.name(),
        plan.price(),
        code_inline(order_code),
    )
}

pub fn payment_made(plan: Plan) -> String {
    format!(
        "<b>Thank You for Your {} Purchase!</b>

Your payment confirmation has been received and our team has been notified.

<b>Next Steps:</b>
1. Our support team will contact you within 24 hours
2. They will guide you through the setup process
3. You'll receive access to all included benefits

Need immediate assistance? Contact our support team directly.",
        plan.name()
    )
}

pub fn setup_guide(plan: Plan) -> &'static str {
    match plan.guide() {
        Guide::Copytrade => COPYTRADE_GUIDE,
        Guide::Ea => EA_GUIDE,
    }
}
