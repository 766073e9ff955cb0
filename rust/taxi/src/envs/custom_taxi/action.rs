use crate::error::TaxiError;
use gymnasium::Discrete;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    South = 0,
    North = 1,
    East = 2,
    West = 3,
    Pickup = 4,
    Dropoff = 5,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::South,
        Action::North,
        Action::East,
        Action::West,
        Action::Pickup,
        Action::Dropoff,
    ];

    pub fn id(self) -> Discrete {
        self as Discrete
    }

    pub fn name(self) -> &'static str {
        match self {
            Action::South => "South",
            Action::North => "North",
            Action::East => "East",
            Action::West => "West",
            Action::Pickup => "Pickup",
            Action::Dropoff => "Dropoff",
        }
    }
}

impl TryFrom<Discrete> for Action {
    type Error = TaxiError;

    fn try_from(a: Discrete) -> Result<Self, Self::Error> {
        Action::ALL
            .get(a)
            .copied()
            .ok_or(TaxiError::InvalidAction(a))
    }
}
