use crate::model::{GuestId, HomestayId};

/// The single, shared rental cursor.
///
/// At most one unit can be in guest selection at a time; the type makes any other
/// arrangement unrepresentable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RentalState {
    #[default]
    Idle,
    SelectingGuest {
        unit_id: HomestayId,
        candidate: Option<GuestId>,
    },
}

impl RentalState {
    pub fn is_idle(&self) -> bool {
        matches!(self, RentalState::Idle)
    }

    /// The unit currently in guest selection, if any.
    pub fn selecting_unit(&self) -> Option<HomestayId> {
        match self {
            RentalState::Idle => None,
            RentalState::SelectingGuest { unit_id, .. } => Some(*unit_id),
        }
    }

    pub fn candidate(&self) -> Option<GuestId> {
        match self {
            RentalState::Idle => None,
            RentalState::SelectingGuest { candidate, .. } => *candidate,
        }
    }
}
