//! The three steps of the savings wizard.

use prosper_entities::{
    address::AddressSelection,
    home::{self, HomeDetails, HomeDetailsField},
    plan::{PlanKind, SavingsPlan},
};
use thiserror::Error;

use crate::plans;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Address,
    HomeDetails,
    Plans,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Expected step {expected:?} but the wizard is at step {actual:?}")]
    UnexpectedStep { expected: Step, actual: Step },
    #[error("The square footage is required")]
    MissingSquareFootage,
    #[error(transparent)]
    HomeDetails(#[from] home::ParseError),
}

/// Local UI state of the wizard; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Wizard {
    step: Step,
    address: Option<AddressSelection>,
    home_details: HomeDetails,
    expanded_plan: Option<PlanKind>,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn step(&self) -> Step {
        self.step
    }

    pub const fn address(&self) -> Option<&AddressSelection> {
        self.address.as_ref()
    }

    pub const fn home_details(&self) -> &HomeDetails {
        &self.home_details
    }

    pub const fn expanded_plan(&self) -> Option<PlanKind> {
        self.expanded_plan
    }

    pub fn plans(&self) -> &'static [SavingsPlan] {
        plans::savings_plans()
    }

    pub fn select_address(&mut self, selection: AddressSelection) -> Result<(), Error> {
        self.expect_step(Step::Address)?;
        log::info!("Address selected: {}", selection.formatted_address);
        self.address = Some(selection);
        self.step = Step::HomeDetails;
        Ok(())
    }

    pub fn update_home_details(
        &mut self,
        field: HomeDetailsField,
        value: &str,
    ) -> Result<(), Error> {
        self.expect_step(Step::HomeDetails)?;
        self.home_details.set(field, value)?;
        Ok(())
    }

    /// Only the presence of the square footage is checked.
    pub fn submit_home_details(&mut self) -> Result<(), Error> {
        self.expect_step(Step::HomeDetails)?;
        if !self.home_details.has_square_footage() {
            return Err(Error::MissingSquareFootage);
        }
        log::debug!("Home details submitted: {:?}", self.home_details);
        self.step = Step::Plans;
        Ok(())
    }

    /// Expand the plan or collapse it if it is already expanded.
    pub fn toggle_plan(&mut self, kind: PlanKind) -> Result<(), Error> {
        self.expect_step(Step::Plans)?;
        self.expanded_plan = if self.expanded_plan == Some(kind) {
            None
        } else {
            Some(kind)
        };
        Ok(())
    }

    pub fn is_expanded(&self, kind: PlanKind) -> bool {
        self.expanded_plan == Some(kind)
    }

    fn expect_step(&self, expected: Step) -> Result<(), Error> {
        if self.step == expected {
            Ok(())
        } else {
            Err(Error::UnexpectedStep {
                expected,
                actual: self.step,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use prosper_entities::{
        geo::MapPoint,
        home::{CoolingSystem, FloorCount, HeatingSystem},
    };

    use super::*;

    fn main_st() -> AddressSelection {
        AddressSelection::try_new("1 Main St", MapPoint::from_lat_lng_deg(40.0, -74.0)).unwrap()
    }

    fn at_home_details() -> Wizard {
        let mut wizard = Wizard::new();
        wizard.select_address(main_st()).unwrap();
        wizard
    }

    #[test]
    fn select_address() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.step(), Step::Address);
        wizard.select_address(main_st()).unwrap();
        assert_eq!(wizard.step(), Step::HomeDetails);
        assert_eq!(wizard.address(), Some(&main_st()));
    }

    #[test]
    fn submit_with_square_footage_only() {
        let mut wizard = at_home_details();
        wizard
            .update_home_details(HomeDetailsField::SquareFootage, "1500")
            .unwrap();
        wizard.submit_home_details().unwrap();
        assert_eq!(wizard.step(), Step::Plans);
        let details = wizard.home_details();
        assert_eq!(details.num_floors, FloorCount::One);
        assert_eq!(details.heating_system, HeatingSystem::Furnace);
        assert_eq!(details.cooling_system, CoolingSystem::CentralAc);
    }

    #[test]
    fn no_cross_field_validation() {
        let mut wizard = at_home_details();
        for (field, value) in [
            (HomeDetailsField::SquareFootage, "1500"),
            (HomeDetailsField::NumFloors, "4"),
            (HomeDetailsField::HeatingSystem, "electric"),
            (HomeDetailsField::CoolingSystem, "heat_pump"),
        ] {
            wizard.update_home_details(field, value).unwrap();
        }
        wizard.submit_home_details().unwrap();
        assert_eq!(wizard.step(), Step::Plans);
    }

    #[test]
    fn square_footage_is_required() {
        let mut wizard = at_home_details();
        assert_eq!(
            wizard.submit_home_details(),
            Err(Error::MissingSquareFootage)
        );
        assert_eq!(wizard.step(), Step::HomeDetails);
    }

    #[test]
    fn invalid_option_keeps_state() {
        let mut wizard = at_home_details();
        let before = wizard.clone();
        let err = wizard
            .update_home_details(HomeDetailsField::NumFloors, "12")
            .unwrap_err();
        assert!(matches!(err, Error::HomeDetails(_)));
        assert_eq!(wizard, before);
    }

    #[test]
    fn operations_in_wrong_step() {
        let mut wizard = Wizard::new();
        assert_eq!(
            wizard.submit_home_details(),
            Err(Error::UnexpectedStep {
                expected: Step::HomeDetails,
                actual: Step::Address
            })
        );
        assert!(wizard.toggle_plan(PlanKind::Replace).is_err());
        wizard.select_address(main_st()).unwrap();
        assert!(wizard.select_address(main_st()).is_err());
        assert_eq!(wizard.step(), Step::HomeDetails);
    }

    #[test]
    fn toggle_plans() {
        let mut wizard = at_home_details();
        wizard
            .update_home_details(HomeDetailsField::SquareFootage, "1500")
            .unwrap();
        wizard.submit_home_details().unwrap();
        assert_eq!(wizard.plans().len(), 3);
        assert_eq!(wizard.expanded_plan(), None);

        wizard.toggle_plan(PlanKind::DualFuel).unwrap();
        assert!(wizard.is_expanded(PlanKind::DualFuel));
        wizard.toggle_plan(PlanKind::HeatPump).unwrap();
        assert!(!wizard.is_expanded(PlanKind::DualFuel));
        assert_eq!(wizard.expanded_plan(), Some(PlanKind::HeatPump));
        wizard.toggle_plan(PlanKind::HeatPump).unwrap();
        assert_eq!(wizard.expanded_plan(), None);
    }
}
