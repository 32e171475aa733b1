use prosper_entities::plan::{AnnualCosts, PlanKind, SavingsPlan};

const CURRENT_COSTS: AnnualCosts = AnnualCosts {
    heating: 1200,
    cooling: 300,
};

// Mock data until there is a real energy model behind it.
pub const SAVINGS_PLANS: [SavingsPlan; 3] = [
    SavingsPlan {
        kind: PlanKind::Replace,
        current_costs: CURRENT_COSTS,
        new_costs: AnnualCosts {
            heating: 800,
            cooling: 300,
        },
        installation_cost: 8_000,
        eligible_rebates: 2_000,
    },
    SavingsPlan {
        kind: PlanKind::DualFuel,
        current_costs: CURRENT_COSTS,
        new_costs: AnnualCosts {
            heating: 600,
            cooling: 250,
        },
        installation_cost: 12_000,
        eligible_rebates: 3_500,
    },
    SavingsPlan {
        kind: PlanKind::HeatPump,
        current_costs: CURRENT_COSTS,
        new_costs: AnnualCosts {
            heating: 400,
            cooling: 200,
        },
        installation_cost: 15_000,
        eligible_rebates: 5_000,
    },
];

pub fn savings_plans() -> &'static [SavingsPlan] {
    &SAVINGS_PLANS
}

pub fn find_plan(kind: PlanKind) -> Option<&'static SavingsPlan> {
    SAVINGS_PLANS.iter().find(|plan| plan.kind == kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use PlanKind::{DualFuel, HeatPump, Replace};

    #[test]
    fn one_plan_per_kind() {
        let kinds: Vec<_> = savings_plans().iter().map(|p| p.kind).collect();
        assert_eq!(kinds, vec![Replace, DualFuel, HeatPump]);
    }

    #[test]
    fn annual_savings_of_catalogue() {
        let savings: Vec<_> = savings_plans()
            .iter()
            .map(SavingsPlan::annual_savings)
            .collect();
        assert_eq!(savings, vec![400, 650, 900]);
    }

    #[test]
    fn find_by_kind() {
        let plan = find_plan(DualFuel).unwrap();
        assert_eq!(plan.installation_cost, 12_000);
        assert_eq!(plan.eligible_rebates, 3_500);
    }
}
