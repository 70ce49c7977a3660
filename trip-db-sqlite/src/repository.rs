use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, sqlite::SqlitePool};
use uuid::Uuid;

use trip_core::{
    CrewMember, EstimateForm, EstimateRepository, FlightLeg, NewSavedEstimate, RateProfile,
    RepositoryError, SavedEstimate,
};

pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = SqlitePool::connect(database_url)
            .await
            .with_context(|| format!("Failed to connect to database: {}", database_url))?;
        Ok(Self { pool })
    }

    pub async fn new_with_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn run_migrations(&self) -> Result<()> {
        tracing::debug!("running sqlite migrations");
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("Failed to run database migrations")?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn fetch_legs(
        &self,
        estimate_id: i64,
    ) -> Result<Vec<FlightLeg>, RepositoryError> {
        let rows: Vec<LegRow> = sqlx::query_as(
            "SELECT from_label, to_label, hours, minutes, fuel_burn
             FROM estimate_leg WHERE estimate_id = ? ORDER BY position",
        )
        .bind(estimate_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.into_iter().map(FlightLeg::try_from).collect()
    }

    async fn fetch_crew(
        &self,
        estimate_id: i64,
    ) -> Result<Vec<CrewMember>, RepositoryError> {
        let rows: Vec<CrewRow> = sqlx::query_as(
            "SELECT role, rate FROM estimate_crew WHERE estimate_id = ? ORDER BY position",
        )
        .bind(estimate_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.into_iter().map(CrewMember::try_from).collect()
    }

    async fn assemble(
        &self,
        row: SavedEstimateRow,
    ) -> Result<SavedEstimate, RepositoryError> {
        let legs = self.fetch_legs(row.id).await?;
        let crew = self.fetch_crew(row.id).await?;
        Ok(row.into_estimate(legs, crew))
    }
}

#[derive(FromRow)]
struct SavedEstimateRow {
    id: i64,
    name: String,
    owner_email: Option<String>,
    share_token: Option<String>,
    fuel_density: String,
    fuel_price: String,
    include_apu: bool,
    apu_burn: String,
    trip_days: String,
    hotel_stays: String,
    hotel_rate: String,
    meals_rate: String,
    other_rate: String,
    rental_car: String,
    airfare: String,
    mileage: String,
    maintenance_rate: String,
    consumables_rate: String,
    additional_rate: String,
    landing_fees: String,
    catering: String,
    handling: String,
    passenger_transport: String,
    facility_fees: String,
    special_event_fees: String,
    ramp_parking: String,
    customs: String,
    hangar: String,
    other_airport: String,
    trip_coordination_fee: String,
    other_misc: String,
    trip_notes: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl SavedEstimateRow {
    /// The scalar form fields are stored as the strings the form captured,
    /// so no numeric parsing happens here — coercion stays at the form
    /// boundary.
    fn into_estimate(
        self,
        legs: Vec<FlightLeg>,
        crew: Vec<CrewMember>,
    ) -> SavedEstimate {
        SavedEstimate {
            id: self.id,
            name: self.name,
            legs,
            crew,
            form: EstimateForm {
                fuel_density: self.fuel_density,
                fuel_price: self.fuel_price,
                include_apu: self.include_apu,
                apu_burn: self.apu_burn,
                trip_days: self.trip_days,
                hotel_stays: self.hotel_stays,
                hotel_rate: self.hotel_rate,
                meals_rate: self.meals_rate,
                other_rate: self.other_rate,
                rental_car: self.rental_car,
                airfare: self.airfare,
                mileage: self.mileage,
                maintenance_rate: self.maintenance_rate,
                consumables_rate: self.consumables_rate,
                additional_rate: self.additional_rate,
                landing_fees: self.landing_fees,
                catering: self.catering,
                handling: self.handling,
                passenger_transport: self.passenger_transport,
                facility_fees: self.facility_fees,
                special_event_fees: self.special_event_fees,
                ramp_parking: self.ramp_parking,
                customs: self.customs,
                hangar: self.hangar,
                other_airport: self.other_airport,
                trip_coordination_fee: self.trip_coordination_fee,
                other_misc: self.other_misc,
                trip_notes: self.trip_notes,
            },
            share_token: self.share_token,
            owner_email: self.owner_email,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(FromRow)]
struct LegRow {
    from_label: String,
    to_label: String,
    hours: i64,
    minutes: i64,
    fuel_burn: String,
}

impl TryFrom<LegRow> for FlightLeg {
    type Error = RepositoryError;

    fn try_from(row: LegRow) -> Result<Self, Self::Error> {
        Ok(FlightLeg {
            from: row.from_label,
            to: row.to_label,
            hours: parse_count(row.hours, "hours")?,
            minutes: parse_count(row.minutes, "minutes")?,
            fuel_burn: parse_decimal(&row.fuel_burn)?,
        })
    }
}

#[derive(FromRow)]
struct CrewRow {
    role: String,
    rate: String,
}

impl TryFrom<CrewRow> for CrewMember {
    type Error = RepositoryError;

    fn try_from(row: CrewRow) -> Result<Self, Self::Error> {
        Ok(CrewMember {
            role: row.role,
            rate: parse_decimal(&row.rate)?,
        })
    }
}

#[derive(FromRow)]
struct ProfileRow {
    id: String,
    name: String,
    fuel_price: String,
    fuel_density: String,
    pilots_required: i64,
    pilot_rate: String,
    attendants_required: i64,
    attendant_rate: String,
    hotel_rate: String,
    meals_rate: String,
    maintenance_rate: String,
    apu_burn: String,
    is_standard: bool,
}

impl TryFrom<ProfileRow> for RateProfile {
    type Error = RepositoryError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        Ok(RateProfile {
            id: row.id,
            name: row.name,
            fuel_price: parse_decimal(&row.fuel_price)?,
            fuel_density: parse_decimal(&row.fuel_density)?,
            pilots_required: parse_count(row.pilots_required, "pilots_required")?,
            pilot_rate: parse_decimal(&row.pilot_rate)?,
            attendants_required: parse_count(row.attendants_required, "attendants_required")?,
            attendant_rate: parse_decimal(&row.attendant_rate)?,
            hotel_rate: parse_decimal(&row.hotel_rate)?,
            meals_rate: parse_decimal(&row.meals_rate)?,
            maintenance_rate: parse_decimal(&row.maintenance_rate)?,
            apu_burn: parse_decimal(&row.apu_burn)?,
            is_standard: row.is_standard,
        })
    }
}

fn db_err(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Database(e.to_string())
}

fn parse_decimal(s: &str) -> Result<Decimal, RepositoryError> {
    s.parse::<Decimal>()
        .map_err(|e| RepositoryError::Database(format!("Failed to parse decimal '{}': {}", s, e)))
}

fn parse_count(
    value: i64,
    column: &str,
) -> Result<u32, RepositoryError> {
    u32::try_from(value).map_err(|_| {
        RepositoryError::Database(format!("Column '{}' out of range: {}", column, value))
    })
}

async fn insert_legs(
    tx: &mut sqlx::SqliteConnection,
    estimate_id: i64,
    legs: &[FlightLeg],
) -> Result<(), RepositoryError> {
    for (position, leg) in legs.iter().enumerate() {
        sqlx::query(
            "INSERT INTO estimate_leg (estimate_id, position, from_label, to_label, hours, minutes, fuel_burn)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(estimate_id)
        .bind(position as i64)
        .bind(&leg.from)
        .bind(&leg.to)
        .bind(i64::from(leg.hours))
        .bind(i64::from(leg.minutes))
        .bind(leg.fuel_burn.to_string())
        .execute(&mut *tx)
        .await
        .map_err(db_err)?;
    }
    Ok(())
}

async fn insert_crew(
    tx: &mut sqlx::SqliteConnection,
    estimate_id: i64,
    crew: &[CrewMember],
) -> Result<(), RepositoryError> {
    for (position, member) in crew.iter().enumerate() {
        sqlx::query(
            "INSERT INTO estimate_crew (estimate_id, position, role, rate)
             VALUES (?, ?, ?, ?)",
        )
        .bind(estimate_id)
        .bind(position as i64)
        .bind(&member.role)
        .bind(member.rate.to_string())
        .execute(&mut *tx)
        .await
        .map_err(db_err)?;
    }
    Ok(())
}

#[async_trait]
impl EstimateRepository for SqliteRepository {
    async fn create_estimate(
        &self,
        estimate: NewSavedEstimate,
    ) -> Result<SavedEstimate, RepositoryError> {
        let now = Utc::now();
        let form = &estimate.form;

        let mut tx = self.pool.begin().await.map_err(db_err)?;

        let result = sqlx::query(
            "INSERT INTO saved_estimate (
                name, owner_email,
                fuel_density, fuel_price, include_apu, apu_burn,
                trip_days, hotel_stays, hotel_rate, meals_rate, other_rate,
                rental_car, airfare, mileage,
                maintenance_rate, consumables_rate, additional_rate,
                landing_fees, catering, handling, passenger_transport,
                facility_fees, special_event_fees, ramp_parking, customs,
                hangar, other_airport,
                trip_coordination_fee, other_misc, trip_notes,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&estimate.name)
        .bind(&estimate.owner_email)
        .bind(&form.fuel_density)
        .bind(&form.fuel_price)
        .bind(form.include_apu)
        .bind(&form.apu_burn)
        .bind(&form.trip_days)
        .bind(&form.hotel_stays)
        .bind(&form.hotel_rate)
        .bind(&form.meals_rate)
        .bind(&form.other_rate)
        .bind(&form.rental_car)
        .bind(&form.airfare)
        .bind(&form.mileage)
        .bind(&form.maintenance_rate)
        .bind(&form.consumables_rate)
        .bind(&form.additional_rate)
        .bind(&form.landing_fees)
        .bind(&form.catering)
        .bind(&form.handling)
        .bind(&form.passenger_transport)
        .bind(&form.facility_fees)
        .bind(&form.special_event_fees)
        .bind(&form.ramp_parking)
        .bind(&form.customs)
        .bind(&form.hangar)
        .bind(&form.other_airport)
        .bind(&form.trip_coordination_fee)
        .bind(&form.other_misc)
        .bind(&form.trip_notes)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(db_err)?;

        let id = result.last_insert_rowid();
        insert_legs(&mut *tx, id, &estimate.legs).await?;
        insert_crew(&mut *tx, id, &estimate.crew).await?;

        tx.commit().await.map_err(db_err)?;

        self.get_estimate(id).await
    }

    async fn get_estimate(
        &self,
        id: i64,
    ) -> Result<SavedEstimate, RepositoryError> {
        let row: SavedEstimateRow = sqlx::query_as("SELECT * FROM saved_estimate WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?
            .ok_or(RepositoryError::NotFound)?;

        self.assemble(row).await
    }

    async fn update_estimate(
        &self,
        estimate: &SavedEstimate,
    ) -> Result<(), RepositoryError> {
        let now = Utc::now();
        let form = &estimate.form;

        let mut tx = self.pool.begin().await.map_err(db_err)?;

        let result = sqlx::query(
            "UPDATE saved_estimate SET
                name = ?, owner_email = ?,
                fuel_density = ?, fuel_price = ?, include_apu = ?, apu_burn = ?,
                trip_days = ?, hotel_stays = ?, hotel_rate = ?, meals_rate = ?, other_rate = ?,
                rental_car = ?, airfare = ?, mileage = ?,
                maintenance_rate = ?, consumables_rate = ?, additional_rate = ?,
                landing_fees = ?, catering = ?, handling = ?, passenger_transport = ?,
                facility_fees = ?, special_event_fees = ?, ramp_parking = ?, customs = ?,
                hangar = ?, other_airport = ?,
                trip_coordination_fee = ?, other_misc = ?, trip_notes = ?,
                updated_at = ?
             WHERE id = ?",
        )
        .bind(&estimate.name)
        .bind(&estimate.owner_email)
        .bind(&form.fuel_density)
        .bind(&form.fuel_price)
        .bind(form.include_apu)
        .bind(&form.apu_burn)
        .bind(&form.trip_days)
        .bind(&form.hotel_stays)
        .bind(&form.hotel_rate)
        .bind(&form.meals_rate)
        .bind(&form.other_rate)
        .bind(&form.rental_car)
        .bind(&form.airfare)
        .bind(&form.mileage)
        .bind(&form.maintenance_rate)
        .bind(&form.consumables_rate)
        .bind(&form.additional_rate)
        .bind(&form.landing_fees)
        .bind(&form.catering)
        .bind(&form.handling)
        .bind(&form.passenger_transport)
        .bind(&form.facility_fees)
        .bind(&form.special_event_fees)
        .bind(&form.ramp_parking)
        .bind(&form.customs)
        .bind(&form.hangar)
        .bind(&form.other_airport)
        .bind(&form.trip_coordination_fee)
        .bind(&form.other_misc)
        .bind(&form.trip_notes)
        .bind(now)
        .bind(estimate.id)
        .execute(&mut *tx)
        .await
        .map_err(db_err)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        sqlx::query("DELETE FROM estimate_leg WHERE estimate_id = ?")
            .bind(estimate.id)
            .execute(&mut *tx)
            .await
            .map_err(db_err)?;
        sqlx::query("DELETE FROM estimate_crew WHERE estimate_id = ?")
            .bind(estimate.id)
            .execute(&mut *tx)
            .await
            .map_err(db_err)?;

        insert_legs(&mut *tx, estimate.id, &estimate.legs).await?;
        insert_crew(&mut *tx, estimate.id, &estimate.crew).await?;

        tx.commit().await.map_err(db_err)
    }

    async fn delete_estimate(
        &self,
        id: i64,
    ) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(db_err)?;

        sqlx::query("DELETE FROM estimate_leg WHERE estimate_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(db_err)?;
        sqlx::query("DELETE FROM estimate_crew WHERE estimate_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(db_err)?;

        let result = sqlx::query("DELETE FROM saved_estimate WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(db_err)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        tx.commit().await.map_err(db_err)
    }

    async fn list_estimates(&self) -> Result<Vec<SavedEstimate>, RepositoryError> {
        let rows: Vec<SavedEstimateRow> =
            sqlx::query_as("SELECT * FROM saved_estimate ORDER BY updated_at DESC")
                .fetch_all(&self.pool)
                .await
                .map_err(db_err)?;

        let mut estimates = Vec::with_capacity(rows.len());
        for row in rows {
            estimates.push(self.assemble(row).await?);
        }
        Ok(estimates)
    }

    async fn create_share(
        &self,
        estimate_id: i64,
    ) -> Result<String, RepositoryError> {
        let existing: Option<(Option<String>,)> =
            sqlx::query_as("SELECT share_token FROM saved_estimate WHERE id = ?")
                .bind(estimate_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(db_err)?;

        let (token,) = existing.ok_or(RepositoryError::NotFound)?;
        if let Some(token) = token {
            return Ok(token);
        }

        let token = Uuid::new_v4().to_string();
        sqlx::query("UPDATE saved_estimate SET share_token = ? WHERE id = ?")
            .bind(&token)
            .bind(estimate_id)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(token)
    }

    async fn get_shared_estimate(
        &self,
        share_token: &str,
    ) -> Result<SavedEstimate, RepositoryError> {
        let row: SavedEstimateRow =
            sqlx::query_as("SELECT * FROM saved_estimate WHERE share_token = ?")
                .bind(share_token)
                .fetch_optional(&self.pool)
                .await
                .map_err(db_err)?
                .ok_or(RepositoryError::NotFound)?;

        self.assemble(row).await
    }

    async fn delete_share(
        &self,
        estimate_id: i64,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE saved_estimate SET share_token = NULL WHERE id = ?")
            .bind(estimate_id)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn upsert_profile(
        &self,
        profile: &RateProfile,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO rate_profile (
                id, name, fuel_price, fuel_density,
                pilots_required, pilot_rate, attendants_required, attendant_rate,
                hotel_rate, meals_rate, maintenance_rate, apu_burn, is_standard
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                fuel_price = excluded.fuel_price,
                fuel_density = excluded.fuel_density,
                pilots_required = excluded.pilots_required,
                pilot_rate = excluded.pilot_rate,
                attendants_required = excluded.attendants_required,
                attendant_rate = excluded.attendant_rate,
                hotel_rate = excluded.hotel_rate,
                meals_rate = excluded.meals_rate,
                maintenance_rate = excluded.maintenance_rate,
                apu_burn = excluded.apu_burn,
                is_standard = excluded.is_standard",
        )
        .bind(&profile.id)
        .bind(&profile.name)
        .bind(profile.fuel_price.to_string())
        .bind(profile.fuel_density.to_string())
        .bind(i64::from(profile.pilots_required))
        .bind(profile.pilot_rate.to_string())
        .bind(i64::from(profile.attendants_required))
        .bind(profile.attendant_rate.to_string())
        .bind(profile.hotel_rate.to_string())
        .bind(profile.meals_rate.to_string())
        .bind(profile.maintenance_rate.to_string())
        .bind(profile.apu_burn.to_string())
        .bind(profile.is_standard)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(())
    }

    async fn get_profile(
        &self,
        id: &str,
    ) -> Result<RateProfile, RepositoryError> {
        let row: ProfileRow = sqlx::query_as("SELECT * FROM rate_profile WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?
            .ok_or(RepositoryError::NotFound)?;

        RateProfile::try_from(row)
    }

    async fn list_profiles(&self) -> Result<Vec<RateProfile>, RepositoryError> {
        let rows: Vec<ProfileRow> =
            sqlx::query_as("SELECT * FROM rate_profile ORDER BY is_standard DESC, name")
                .fetch_all(&self.pool)
                .await
                .map_err(db_err)?;

        rows.into_iter().map(RateProfile::try_from).collect()
    }

    async fn delete_profile(
        &self,
        id: &str,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM rate_profile WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
