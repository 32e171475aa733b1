use crate::geo::MapPoint;

/// The normalized result of picking a suggested place.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressSelection {
    pub formatted_address: String,
    pub pos: MapPoint,
}

impl AddressSelection {
    /// Both a non-blank address and valid coordinates are required,
    /// anything else is considered a partial selection.
    pub fn try_new(formatted_address: impl Into<String>, pos: MapPoint) -> Option<Self> {
        let formatted_address = formatted_address.into();
        if formatted_address.trim().is_empty() || !pos.is_valid() {
            return None;
        }
        Some(Self {
            formatted_address,
            pos,
        })
    }

    pub const fn latitude(&self) -> f64 {
        self.pos.lat
    }

    pub const fn longitude(&self) -> f64 {
        self.pos.lng
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_selection() {
        let pos = MapPoint::from_lat_lng_deg(40.0, -74.0);
        let sel = AddressSelection::try_new("1 Main St", pos).unwrap();
        assert_eq!(sel.formatted_address, "1 Main St");
        assert_eq!(sel.latitude(), 40.0);
        assert_eq!(sel.longitude(), -74.0);
    }

    #[test]
    fn partial_selections() {
        let pos = MapPoint::from_lat_lng_deg(40.0, -74.0);
        assert!(AddressSelection::try_new("", pos).is_none());
        assert!(AddressSelection::try_new("  ", pos).is_none());
        let invalid = MapPoint::from_lat_lng_deg(140.0, -74.0);
        assert!(AddressSelection::try_new("1 Main St", invalid).is_none());
    }
}
