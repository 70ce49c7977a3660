//! Caller-side calculator state.
//!
//! The UI layer owns mutable legs, crew, and form fields; the engine only
//! ever receives an immutable [`EstimateInputs`] snapshot. This module
//! keeps that ownership split explicit: mutate here, `snapshot()` on every
//! change, hand the value to [`crate::calculations::calculate`].

use rust_decimal::Decimal;

use crate::calculations::calculate;
use crate::form::EstimateForm;
use crate::models::{
    CrewMember, Estimate, EstimateInputs, FlightLeg, NewSavedEstimate, RateProfile, SavedEstimate,
    ROLE_FLIGHT_ATTENDANT, ROLE_PILOT,
};

/// Mutable working state of one estimate-in-progress.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculatorState {
    pub legs: Vec<FlightLeg>,
    pub crew: Vec<CrewMember>,
    pub form: EstimateForm,
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an empty leg and returns it for field-by-field editing.
    pub fn add_leg(&mut self) -> &mut FlightLeg {
        self.legs.push(FlightLeg::default());
        self.legs.last_mut().expect("leg was just pushed")
    }

    /// Removes the leg at `index`; out-of-range indices are ignored.
    pub fn remove_leg(
        &mut self,
        index: usize,
    ) {
        if index < self.legs.len() {
            self.legs.remove(index);
        }
    }

    pub fn add_crew(
        &mut self,
        role: impl Into<String>,
        rate: Decimal,
    ) {
        self.crew.push(CrewMember::new(role, rate));
    }

    /// Removes the crew member at `index`; out-of-range indices are ignored.
    pub fn remove_crew(
        &mut self,
        index: usize,
    ) {
        if index < self.crew.len() {
            self.crew.remove(index);
        }
    }

    /// Clears legs, crew, and every form field back to defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Seeds rates from a profile and rebuilds the crew roster from its
    /// required pilot and attendant counts. Fields a profile does not
    /// carry (per-diems, fees, notes) are left untouched.
    pub fn apply_profile(
        &mut self,
        profile: &RateProfile,
    ) {
        self.form.fuel_price = profile.fuel_price.to_string();
        self.form.fuel_density = profile.fuel_density.to_string();
        self.form.hotel_rate = profile.hotel_rate.to_string();
        self.form.meals_rate = profile.meals_rate.to_string();
        self.form.maintenance_rate = profile.maintenance_rate.to_string();
        self.form.apu_burn = profile.apu_burn.to_string();

        self.crew.clear();
        for _ in 0..profile.pilots_required {
            self.add_crew(ROLE_PILOT, profile.pilot_rate);
        }
        for _ in 0..profile.attendants_required {
            self.add_crew(ROLE_FLIGHT_ATTENDANT, profile.attendant_rate);
        }
    }

    /// Restores state from a saved estimate.
    pub fn load(
        &mut self,
        saved: &SavedEstimate,
    ) {
        self.legs = saved.legs.clone();
        self.crew = saved.crew.clone();
        self.form = saved.form.clone();
    }

    /// Captures the current state as a record ready to persist.
    pub fn to_saved(
        &self,
        name: impl Into<String>,
        owner_email: Option<String>,
    ) -> NewSavedEstimate {
        NewSavedEstimate {
            name: name.into(),
            legs: self.legs.clone(),
            crew: self.crew.clone(),
            form: self.form.clone(),
            owner_email,
        }
    }

    /// Assembles the immutable input value for one calculation.
    pub fn snapshot(&self) -> EstimateInputs {
        self.form.to_inputs(self.legs.clone(), self.crew.clone())
    }

    /// Convenience: snapshot and calculate in one step.
    pub fn estimate(&self) -> Estimate {
        calculate(&self.snapshot())
    }
}
