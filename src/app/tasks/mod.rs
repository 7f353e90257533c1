//! Background tasks. The only one in this demo is the simulated booking
//! confirmation delay.

pub(crate) mod booking;
