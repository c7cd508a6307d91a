//! Response assembly: one birth request in, one chart out.
//!
//! Collaborator failures abort the request. Panchang and dasha failures
//! are folded into their own sections so the rest of the chart survives.

use std::collections::BTreeMap;

use jataka_base::{
    DashaError, DashaReport, PanchangError, normalize_360, try_panchangam, vimshottari_dasha,
};
use tracing::{debug, error, info_span, warn};

use crate::config::ChartConfig;
use crate::error::{ChartError, CollaboratorError};
use crate::normalize::{
    ASCENDANT_MARKERS, NavamsaLayout, normalize_houses, normalize_navamsa, normalize_planets,
    planets_by_house,
};
use crate::provider::{EphemerisProvider, HouseGenerator, NavamsaGenerator};
use crate::request::{BirthDetails, BirthRequest};
use crate::response::{
    BirthData, ChartEnvelope, ChartResponse, MoonNakshatra, NavamsaView, PanchangReport,
    SignSummary,
};

/// Builds charts from an ephemeris provider and the two chart generators.
#[derive(Debug, Clone)]
pub struct ChartService<E, H, N> {
    ephemeris: E,
    houses: H,
    navamsa: N,
    config: ChartConfig,
}

fn logged(err: CollaboratorError) -> ChartError {
    error!(collaborator = %err.collaborator, message = %err.message, "collaborator failed");
    err.into()
}

impl<E, H, N> ChartService<E, H, N>
where
    E: EphemerisProvider,
    H: HouseGenerator,
    N: NavamsaGenerator,
{
    pub fn new(ephemeris: E, houses: H, navamsa: N) -> Self {
        Self::with_config(ephemeris, houses, navamsa, ChartConfig::default())
    }

    pub fn with_config(ephemeris: E, houses: H, navamsa: N, config: ChartConfig) -> Self {
        Self {
            ephemeris,
            houses,
            navamsa,
            config,
        }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Validate a request and build its chart.
    pub fn handle(&self, request: &BirthRequest) -> Result<ChartEnvelope, ChartError> {
        let birth = BirthDetails::try_from(request).inspect_err(|e| {
            warn!(error = %e, "rejected birth request");
        })?;
        self.build(&birth).map(ChartEnvelope::ok)
    }

    /// Build the chart for validated birth details.
    pub fn build(&self, birth: &BirthDetails) -> Result<ChartResponse, ChartError> {
        let instant = birth.instant();
        let span = info_span!("birth_chart", %instant, lat = birth.latitude, lon = birth.longitude);
        let _guard = span.enter();

        let snapshot = self
            .ephemeris
            .positions_at(instant, birth.latitude, birth.longitude)
            .map_err(logged)?;
        let ascendant = self
            .ephemeris
            .ascendant_at(instant, birth.latitude, birth.longitude)
            .map_err(logged)?;
        debug!(
            bodies = snapshot.positions.len(),
            ayanamsa = snapshot.ayanamsa,
            ascendant,
            "positions computed"
        );

        let assignment = self
            .houses
            .generate_houses(&snapshot.positions, ascendant)
            .map_err(logged)?;
        debug!(houses = assignment.houses.len(), "houses generated");

        let longitudes: BTreeMap<String, f64> = snapshot
            .positions
            .iter()
            .map(|(name, p)| (name.clone(), p.longitude))
            .collect();
        let raw_navamsa = self
            .navamsa
            .generate_navamsa(&longitudes, snapshot.ayanamsa, ascendant, birth)
            .map_err(logged)?;
        let layout = NavamsaLayout::from_raw(&raw_navamsa);
        debug!(by_house = matches!(layout, NavamsaLayout::ByHouse(_)), "navamsa generated");

        let sun = snapshot.positions.get("Sun").map(|p| normalize_360(p.longitude));
        let moon = snapshot.positions.get("Moon").map(|p| normalize_360(p.longitude));
        let moon_planet = assignment.planets.get("Moon");
        let moon_placement = moon.map(|lon| self.ephemeris.nakshatra_from_longitude(lon));

        let panchangam = PanchangReport::from_result(match (sun, moon, &moon_placement) {
            (None, _, _) => Err(PanchangError::MissingBody("Sun")),
            (_, None, _) | (_, _, None) => Err(PanchangError::MissingBody("Moon")),
            (Some(sun), Some(moon), Some(placement)) => {
                try_panchangam(sun, moon, birth.civil_date(), &placement.name)
            }
        });
        if let Some(e) = panchangam.error() {
            warn!(error = e, "panchang derivation failed");
        }

        let dasha = DashaReport::from_result(
            moon.ok_or(DashaError::MissingMoon)
                .and_then(|lon| vimshottari_dasha(lon, instant)),
        );
        match dasha.error() {
            Some(e) => warn!(error = e, "dasha derivation failed"),
            None => debug!(periods = dasha.sequence().len(), "dasha generated"),
        }

        let raw_planets =
            normalize_planets(&assignment.planets, &snapshot.positions, self.config.dms_style());
        for name in assignment.planets.keys() {
            if !raw_planets.contains_key(name) {
                warn!(body = %name, "no longitude for body, omitted");
            }
        }

        let navamsa_ascendant = ASCENDANT_MARKERS
            .iter()
            .find_map(|m| raw_navamsa.navamsa_positions.get(*m))
            .cloned();

        Ok(ChartResponse {
            birth_data: BirthData::from(birth),
            rasi: normalize_houses(&assignment.houses),
            planets: planets_by_house(&assignment.houses),
            raw_planets,
            lagna: SignSummary::from_house(assignment.houses.get(&1), normalize_360(ascendant)),
            moon_sign: moon.map(|lon| SignSummary::from_planet(moon_planet, lon)),
            moon_nakshatra: moon
                .zip(moon_placement)
                .map(|(lon, placement)| MoonNakshatra::new(placement, moon_planet, lon)),
            panchangam,
            dasha,
            navamsa: NavamsaView {
                houses: normalize_navamsa(layout),
                planets: raw_navamsa.navamsa_positions,
                ascendant: navamsa_ascendant,
            },
            houses: assignment.houses,
            positions: snapshot.positions,
            ascendant,
            ayanamsa: snapshot.ayanamsa,
        })
    }
}
