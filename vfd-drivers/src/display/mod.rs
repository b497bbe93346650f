//! Display drivers
//!
//! Command layers that turn [`CharacterDisplay`](vfd_core::traits::CharacterDisplay)
//! calls into controller byte sequences on a
//! [`Transmitter`](vfd_core::traits::Transmitter).

mod m66004;

pub use m66004::M66004;
