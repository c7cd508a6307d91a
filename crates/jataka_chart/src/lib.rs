//! Birth-chart assembly over pluggable collaborators.
//!
//! The ephemeris provider, house generator and navamsa generator are
//! traits ([`provider`]). [`ChartService`] validates a [`BirthRequest`],
//! calls the collaborators, runs the panchang and dasha derivations from
//! `jataka_base` and normalizes the generator output into a
//! [`ChartResponse`].

pub mod config;
pub mod error;
pub mod fixture;
pub mod normalize;
pub mod provider;
pub mod request;
pub mod response;
pub mod service;

pub use config::{ChartConfig, FormatConfig, LoggingConfig};
pub use error::{ChartError, Collaborator, CollaboratorError, ConfigError, FixtureError};
pub use fixture::RecordedCollaborators;
pub use normalize::{
    LAGNA, NavamsaLayout, NormalizedHouse, NormalizedPlanet, normalize_houses, normalize_navamsa,
    normalize_planets, planets_by_house,
};
pub use provider::{
    BodyPosition, Dignity, EphemerisProvider, EphemerisSnapshot, HouseAssignment, HouseGenerator,
    NakshatraPlacement, NavamsaGenerator, NavamsaPosition, RawHouse, RawNavamsaChart, RawPlanet,
};
pub use request::{BirthDetails, BirthRequest};
pub use response::{
    BirthData, ChartEnvelope, ChartResponse, ErrorBody, MoonNakshatra, NavamsaView,
    PanchangReport, SignSummary,
};
pub use service::ChartService;
