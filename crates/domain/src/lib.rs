//! Host-owned entity shapes and parameter value coercion.

#![forbid(unsafe_code)]

mod campus;
mod events;
mod groups;
mod person;
mod prayer;
mod values;

pub use campus::{Campus, Category};
pub use events::{
    NewRegistrant, NewRegistration, Registration, RegistrationInstance, RegistrationRegistrant,
};
pub use groups::{Group, GroupMatch, GroupType, NewGroup};
pub use person::{Person, PersonAlias};
pub use prayer::{NewPrayerRequest, PrayerRequest};
pub use values::{EntityKey, lenient_bool};
