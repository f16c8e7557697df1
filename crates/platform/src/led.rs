//! Status LED abstraction

use crate::state::DeviceState;

/// Status LED driven by device state.
pub trait Led {
    /// React to a device state change
    fn on_state_changed(&mut self, state: DeviceState);
}
