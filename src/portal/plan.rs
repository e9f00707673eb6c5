use std::fmt;

/// 可以购买的套餐
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Plan {
    Monthly,
    Quarterly,
    Annual,
    Copytrade,
    PremiumVipEa,
}

/// 设置指南分两种：跟单账户、EA 安装
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guide {
    Copytrade,
    Ea,
}

impl Plan {
    pub const ALL: [Plan; 5] =
        [Self::Monthly, Self::Quarterly, Self::Annual, Self::Copytrade, Self::PremiumVipEa];

    /// EA 价格页上可以直接下单的套餐
    pub const PURCHASABLE: [Plan; 4] =
        [Self::Monthly, Self::Quarterly, Self::Annual, Self::Copytrade];

    /// 回调数据中使用的代码
    pub fn code(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Annual => "annual",
            Self::Copytrade => "copytrade",
            Self::PremiumVipEa => "premium_vip_ea",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|plan| plan.code() == code)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Monthly => "Monthly EA Plan",
            Self::Quarterly => "Quarterly EA Plan",
            Self::Annual => "Annual EA Plan",
            Self::Copytrade => "Copytrade Lifetime Plan",
            Self::PremiumVipEa => "Premium VIP Signal + EA Plan",
        }
    }

    pub fn price(self) -> &'static str {
        match self {
            Self::Monthly => "$200",
            Self::Quarterly => "$500",
            Self::Annual => "$1500",
            Self::Copytrade => "$500",
            Self::PremiumVipEa => "from $400/month",
        }
    }

    /// EA 价格页上的按钮文字
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Monthly => "🔄 Monthly Plan - $200",
            Self::Quarterly => "⭐ Quarterly Plan - $500 (Save 15%)",
            Self::Annual => "🔥 Annual Plan - $1500 (Save 30%)",
            Self::Copytrade => "💰 Copytrade Option - $500 Lifetime",
            Self::PremiumVipEa => "💎 Premium VIP Signal + EA Bundle",
        }
    }

    pub fn guide(self) -> Guide {
        match self {
            Self::Copytrade => Guide::Copytrade,
            _ => Guide::Ea,
        }
    }

    /// 联系客服时使用的订单代码，例如 `EA_MONTHLY_12345`
    pub fn order_code(self, user_id: u64) -> String {
        format!("EA_{}_{}", self.code().to_uppercase(), user_id)
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique() {
        for plan in Plan::ALL {
            assert_eq!(Plan::from_code(plan.code()), Some(plan));
        }
        assert_eq!(Plan::from_code("lifetime"), None);
    }

    #[test]
    fn test_order_code() {
        assert_eq!(Plan::Monthly.order_code(12345), "EA_MONTHLY_12345");
        assert_eq!(Plan::PremiumVipEa.order_code(1), "EA_PREMIUM_VIP_EA_1");
    }

    #[test]
    fn test_guide() {
        assert_eq!(Plan::Copytrade.guide(), Guide::Copytrade);
        assert_eq!(Plan::Annual.guide(), Guide::Ea);
        assert_eq!(Plan::PremiumVipEa.to_string(), "Premium VIP Signal + EA Plan");
    }
}
