use strum::{Display, EnumIter, EnumMessage, EnumString, IntoStaticStr};
use thiserror::Error;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HomeDetails {
    pub square_footage : String,
    pub num_floors     : FloorCount,
    pub heating_system : HeatingSystem,
    pub cooling_system : CoolingSystem,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, IntoStaticStr, EnumIter, EnumMessage,
)]
pub enum FloorCount {
    #[default]
    #[strum(serialize = "1", message = "1 Floor")]
    One,
    #[strum(serialize = "2", message = "2 Floors")]
    Two,
    #[strum(serialize = "3", message = "3 Floors")]
    Three,
    #[strum(serialize = "4", message = "4+ Floors")]
    FourOrMore,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, IntoStaticStr, EnumIter, EnumMessage,
)]
#[strum(serialize_all = "snake_case")]
pub enum HeatingSystem {
    #[default]
    #[strum(message = "Gas Furnace")]
    Furnace,
    #[strum(message = "Gas Boiler")]
    Boiler,
    #[strum(message = "Electric Heating")]
    Electric,
    #[strum(message = "Heat Pump")]
    HeatPump,
    #[strum(message = "Other")]
    Other,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, IntoStaticStr, EnumIter, EnumMessage,
)]
#[strum(serialize_all = "snake_case")]
pub enum CoolingSystem {
    #[default]
    #[strum(message = "Central AC")]
    CentralAc,
    #[strum(message = "Window AC Units")]
    WindowAc,
    #[strum(message = "Heat Pump")]
    HeatPump,
    #[strum(serialize = "none", message = "No Cooling System")]
    NoCooling,
}

/// Fields of [`HomeDetails`] that can be edited one by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum HomeDetailsField {
    SquareFootage,
    NumFloors,
    HeatingSystem,
    CoolingSystem,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid value '{value}' for {field}")]
pub struct ParseError {
    pub field: HomeDetailsField,
    pub value: String,
}

impl HomeDetails {
    /// Replace a single field with the (form) value.
    pub fn set(&mut self, field: HomeDetailsField, value: &str) -> Result<(), ParseError> {
        let invalid = || ParseError {
            field,
            value: value.to_owned(),
        };
        match field {
            HomeDetailsField::SquareFootage => {
                value.clone_into(&mut self.square_footage);
            }
            HomeDetailsField::NumFloors => {
                self.num_floors = value.parse().map_err(|_| invalid())?;
            }
            HomeDetailsField::HeatingSystem => {
                self.heating_system = value.parse().map_err(|_| invalid())?;
            }
            HomeDetailsField::CoolingSystem => {
                self.cooling_system = value.parse().map_err(|_| invalid())?;
            }
        }
        Ok(())
    }

    pub fn has_square_footage(&self) -> bool {
        !self.square_footage.trim().is_empty()
    }

    pub fn square_footage(&self) -> Option<u32> {
        self.square_footage.trim().parse().ok()
    }
}

impl FloorCount {
    pub fn label(self) -> &'static str {
        self.get_message().unwrap_or_default()
    }
}

impl HeatingSystem {
    pub fn label(self) -> &'static str {
        self.get_message().unwrap_or_default()
    }
}

impl CoolingSystem {
    pub fn label(self) -> &'static str {
        self.get_message().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let d = HomeDetails::default();
        assert!(d.square_footage.is_empty());
        assert_eq!(d.num_floors, FloorCount::One);
        assert_eq!(d.heating_system, HeatingSystem::Furnace);
        assert_eq!(d.cooling_system, CoolingSystem::CentralAc);
    }

    #[test]
    fn form_values() {
        assert_eq!(FloorCount::FourOrMore.to_string(), "4");
        assert_eq!(HeatingSystem::HeatPump.to_string(), "heat_pump");
        assert_eq!(CoolingSystem::WindowAc.to_string(), "window_ac");
        assert_eq!(CoolingSystem::NoCooling.to_string(), "none");
        assert_eq!(CoolingSystem::NoCooling.label(), "No Cooling System");
        assert_eq!(FloorCount::Two.label(), "2 Floors");
    }

    #[test]
    fn set_fields() {
        let mut d = HomeDetails::default();
        d.set(HomeDetailsField::SquareFootage, "1500").unwrap();
        d.set(HomeDetailsField::NumFloors, "3").unwrap();
        d.set(HomeDetailsField::HeatingSystem, "boiler").unwrap();
        d.set(HomeDetailsField::CoolingSystem, "none").unwrap();
        assert_eq!(d.square_footage(), Some(1500));
        assert_eq!(d.num_floors, FloorCount::Three);
        assert_eq!(d.heating_system, HeatingSystem::Boiler);
        assert_eq!(d.cooling_system, CoolingSystem::NoCooling);
    }

    #[test]
    fn reject_unknown_option() {
        let mut d = HomeDetails::default();
        let err = d.set(HomeDetailsField::HeatingSystem, "wood_stove").unwrap_err();
        assert_eq!(err.field, HomeDetailsField::HeatingSystem);
        assert_eq!(err.value, "wood_stove");
        assert_eq!(d.heating_system, HeatingSystem::Furnace);
    }

    #[test]
    fn square_footage_presence() {
        let mut d = HomeDetails::default();
        assert!(!d.has_square_footage());
        d.set(HomeDetailsField::SquareFootage, "  ").unwrap();
        assert!(!d.has_square_footage());
        d.set(HomeDetailsField::SquareFootage, "about 1500").unwrap();
        assert!(d.has_square_footage());
        assert_eq!(d.square_footage(), None);
    }
}
