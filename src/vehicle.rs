use std::{fmt, str::FromStr};
use serde::{Deserialize, Serialize};

use crate::errors::DispatchError;
use crate::graph::Category;


/// Emergency vehicle kinds, each bound to one destination category
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Ambulance,
    Firetruck,
    Police,
}

impl VehicleType {

    pub const ALL: [VehicleType; 3] = [VehicleType::Ambulance, VehicleType::Firetruck, VehicleType::Police];

    /// Category of node this vehicle has to reach
    pub fn destination_category(&self) -> Category {
        match self {
            VehicleType::Ambulance => Category::new(Category::HOSPITAL),
            VehicleType::Firetruck => Category::new(Category::FIRE_STATION),
            VehicleType::Police => Category::new(Category::POLICE_STATION),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VehicleType::Ambulance => "ambulance",
            VehicleType::Firetruck => "firetruck",
            VehicleType::Police => "police",
        }
    }

    /// Display color used when highlighting the route
    pub fn color(&self) -> &'static str {
        match self {
            VehicleType::Ambulance => "#DC143C",
            VehicleType::Firetruck => "#aa4203",
            VehicleType::Police => "#3498DB",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VehicleType {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        VehicleType::ALL
            .into_iter()
            .find(|vehicle| vehicle.label().eq_ignore_ascii_case(label))
            .ok_or_else(|| DispatchError::UnrecognizedVehicleType(label.to_string()))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_lookup() {
        assert_eq!(VehicleType::Ambulance.destination_category().as_str(), "hospital");
        assert_eq!(VehicleType::Firetruck.destination_category().as_str(), "fire-station");
        assert_eq!(VehicleType::Police.destination_category().as_str(), "police-station");
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!("ambulance".parse::<VehicleType>().unwrap(), VehicleType::Ambulance);
        assert_eq!(" FireTruck ".parse::<VehicleType>().unwrap(), VehicleType::Firetruck);
        assert_eq!("police".parse::<VehicleType>().unwrap(), VehicleType::Police);
    }

    #[test]
    fn test_unknown_vehicle_is_rejected() {
        let err = "tank".parse::<VehicleType>().unwrap_err();
        assert_eq!(err, DispatchError::UnrecognizedVehicleType("tank".to_string()));
        assert!("".parse::<VehicleType>().is_err());
    }

    #[test]
    fn test_label_round_trips_through_serde() {
        let json = serde_json::to_string(&VehicleType::Firetruck).unwrap();
        assert_eq!(json, "\"firetruck\"");
        let parsed: VehicleType = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, VehicleType::Firetruck);
    }
}
