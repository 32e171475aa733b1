use strum::{Display, EnumIter, EnumMessage, EnumString, IntoStaticStr};

/// The kind of HVAC upgrade.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, EnumIter, EnumMessage,
)]
#[strum(serialize_all = "kebab-case")]
pub enum PlanKind {
    #[strum(
        message = "Replace",
        detailed_message = "Replace your existing system with a high-efficiency model"
    )]
    Replace,
    #[strum(
        message = "Dual-Fuel",
        detailed_message = "Combine a heat pump with your existing heating system"
    )]
    DualFuel,
    #[strum(
        message = "Heat Pump",
        detailed_message = "Switch to an all-electric heat pump system"
    )]
    HeatPump,
}

impl PlanKind {
    pub fn title(self) -> &'static str {
        self.get_message().unwrap_or_default()
    }

    pub fn description(self) -> &'static str {
        self.get_detailed_message().unwrap_or_default()
    }
}

/// Annual energy costs in whole US dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnnualCosts {
    pub heating: u32,
    pub cooling: u32,
}

impl AnnualCosts {
    pub const fn total(&self) -> u32 {
        self.heating + self.cooling
    }
}

/// A savings scenario; all amounts are whole US dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavingsPlan {
    pub kind: PlanKind,
    pub current_costs: AnnualCosts,
    pub new_costs: AnnualCosts,
    pub installation_cost: u32,
    pub eligible_rebates: u32,
}

impl SavingsPlan {
    /// Negative if the new system is more expensive to run.
    pub fn annual_savings(&self) -> i64 {
        i64::from(self.current_costs.total()) - i64::from(self.new_costs.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(current: (u32, u32), new: (u32, u32)) -> SavingsPlan {
        SavingsPlan {
            kind: PlanKind::HeatPump,
            current_costs: AnnualCosts {
                heating: current.0,
                cooling: current.1,
            },
            new_costs: AnnualCosts {
                heating: new.0,
                cooling: new.1,
            },
            installation_cost: 0,
            eligible_rebates: 0,
        }
    }

    #[test]
    fn annual_savings() {
        assert_eq!(plan((1200, 300), (400, 200)).annual_savings(), 900);
        assert_eq!(plan((100, 0), (150, 10)).annual_savings(), -60);
    }

    #[test]
    fn kind_texts() {
        assert_eq!(PlanKind::DualFuel.to_string(), "dual-fuel");
        assert_eq!(PlanKind::DualFuel.title(), "Dual-Fuel");
        assert_eq!(
            PlanKind::Replace.description(),
            "Replace your existing system with a high-efficiency model"
        );
        assert_eq!("heat-pump".parse::<PlanKind>().unwrap(), PlanKind::HeatPump);
    }
}
