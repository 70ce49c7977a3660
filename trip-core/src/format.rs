//! Renders an [`Estimate`] for display, copy, email, and PDF bodies.
//!
//! Pure functions of the estimate value — no new computation happens here,
//! only number formatting and conditional inclusion of non-zero line items.
//! Currency renders with two decimals and comma thousands separators;
//! gallon and whole-hour quantities render with no decimals; fractional
//! flight hours inside hourly-program lines render with two.

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;
use crate::models::Estimate;

/// Shown instead of a breakdown while the trip has no legs yet.
const EMPTY_ESTIMATE: &str = "Add flight legs to see estimate...";

/// Renders the plain-text estimate summary.
pub fn format_text(estimate: &Estimate) -> String {
    if estimate.legs_summary.is_empty() {
        return EMPTY_ESTIMATE.to_string();
    }

    let mut out = String::new();

    out.push_str("LEGS SUMMARY\n");
    for leg in &estimate.legs_summary {
        out.push_str(&format!(
            "Leg {}: {} - {} {}h {}m ({} gallons)\n",
            leg.index,
            leg.from,
            leg.to,
            leg.hours,
            leg.minutes,
            whole(leg.gallons)
        ));
    }

    out.push_str(&format!(
        "\nTotal Flight Time: {}h {}m\n",
        estimate.total_hours, estimate.remaining_minutes
    ));
    out.push_str(&format!(
        "Total Fuel Used: {} gallons\n",
        whole(estimate.total_fuel_gallons)
    ));
    if estimate.include_apu && estimate.active_legs_count > 0 {
        let plural = if estimate.active_legs_count > 1 { "s" } else { "" };
        out.push_str(&format!(
            "  (Includes {} lbs APU burn for {} active leg{})\n",
            whole(estimate.total_apu_fuel),
            estimate.active_legs_count,
            plural
        ));
    }

    out.push_str("\n\nESTIMATE\n");

    for crew in &estimate.crew_details {
        out.push_str(&format!(
            "{} {} day(s) @ ${}\n",
            crew.role,
            crew.days,
            currency(crew.rate)
        ));
    }
    out.push_str(&format!(
        "Crew Day Rate Subtotal: ${}\n",
        currency(estimate.crew_day_total)
    ));

    if estimate.crew_expenses_total > Decimal::ZERO {
        out.push_str("Crew Expenses:\n");
        if estimate.hotel_total > Decimal::ZERO {
            out.push_str(&format!(
                "  Hotel: ${} ({} crew x {} night(s) x ${})\n",
                currency(estimate.hotel_total),
                estimate.crew_count,
                estimate.hotel_stays,
                currency(estimate.hotel_rate)
            ));
        }
        if estimate.meals_total > Decimal::ZERO {
            out.push_str(&format!(
                "  Meals: ${} ({} crew x {} day(s) x ${})\n",
                currency(estimate.meals_total),
                estimate.crew_count,
                estimate.trip_days,
                currency(estimate.meals_rate)
            ));
        }
        if estimate.other_total > Decimal::ZERO {
            out.push_str(&format!("  Other: ${}\n", currency(estimate.other_total)));
        }
        if estimate.rental_car > Decimal::ZERO {
            out.push_str(&format!(
                "  Rental Car: ${}\n",
                currency(estimate.rental_car)
            ));
        }
        if estimate.airfare > Decimal::ZERO {
            out.push_str(&format!("  Airfare: ${}\n", currency(estimate.airfare)));
        }
        if estimate.mileage > Decimal::ZERO {
            out.push_str(&format!("  Mileage: ${}\n", currency(estimate.mileage)));
        }
    }
    out.push_str(&format!(
        "Crew Subtotal: ${}\n\n",
        currency(estimate.crew_subtotal)
    ));

    if estimate.hourly_subtotal > Decimal::ZERO {
        out.push_str(&format!(
            "Hourly Subtotal (Programs & Reserves): ${}\n",
            currency(estimate.hourly_subtotal)
        ));
        if estimate.maintenance_total > Decimal::ZERO {
            out.push_str(&format!(
                "  Maintenance Programs: ${} ({} hrs x ${})\n",
                currency(estimate.maintenance_total),
                two_dp(estimate.total_flight_hours),
                currency(estimate.maintenance_rate)
            ));
        }
        if estimate.consumables_total > Decimal::ZERO {
            out.push_str(&format!(
                "  Other Consumables: ${} ({} hrs x ${})\n",
                currency(estimate.consumables_total),
                two_dp(estimate.total_flight_hours),
                currency(estimate.consumables_rate)
            ));
        }
        if estimate.additional_total > Decimal::ZERO {
            out.push_str(&format!(
                "  Additional: ${} ({} hrs x ${})\n",
                currency(estimate.additional_total),
                two_dp(estimate.total_flight_hours),
                currency(estimate.additional_rate)
            ));
        }
    }

    out.push_str(&format!(
        "Fuel Subtotal: ${}\n",
        currency(estimate.fuel_subtotal)
    ));
    out.push_str(&format!(
        "  ({} gallons @ ${})\n",
        whole(estimate.total_fuel_gallons),
        currency(estimate.fuel_price)
    ));

    if estimate.airport_subtotal > Decimal::ZERO {
        out.push_str(&format!(
            "Airport & Ground Subtotal: ${}\n",
            currency(estimate.airport_subtotal)
        ));
        for (label, amount) in [
            ("Landing Fees", estimate.landing_fees),
            ("Catering", estimate.catering),
            ("Handling", estimate.handling),
            ("Passenger Ground Transport", estimate.passenger_transport),
            ("Facility Fees", estimate.facility_fees),
            ("Special Event Fees", estimate.special_event_fees),
            ("Ramp/Parking", estimate.ramp_parking),
            ("Customs", estimate.customs),
            ("Hangar", estimate.hangar),
            ("Other", estimate.other_airport),
        ] {
            if amount > Decimal::ZERO {
                out.push_str(&format!("  {}: ${}\n", label, currency(amount)));
            }
        }
    }

    if estimate.misc_subtotal > Decimal::ZERO {
        out.push_str(&format!(
            "Miscellaneous Subtotal: ${}\n",
            currency(estimate.misc_subtotal)
        ));
        if estimate.trip_coordination_fee > Decimal::ZERO {
            out.push_str(&format!(
                "  Trip Coordination Fee: ${}\n",
                currency(estimate.trip_coordination_fee)
            ));
        }
        if estimate.other_misc > Decimal::ZERO {
            out.push_str(&format!("  Other: ${}\n", currency(estimate.other_misc)));
        }
    }

    out.push_str(&format!(
        "\nEstimated Total: ${}\n",
        currency(estimate.estimated_total)
    ));

    if !estimate.trip_notes.is_empty() {
        out.push_str(&format!("\nTrip Notes:\n{}\n", estimate.trip_notes));
    }

    out
}

/// Renders the estimate as a minimal HTML block for the share view and
/// document bodies. Same structure and zero-gating as the text rendering.
pub fn format_html(estimate: &Estimate) -> String {
    if estimate.legs_summary.is_empty() {
        return format!("<p>{}</p>", EMPTY_ESTIMATE);
    }

    let mut out = String::new();

    out.push_str("<h3>Legs Summary</h3>\n<ul>\n");
    for leg in &estimate.legs_summary {
        out.push_str(&format!(
            "<li>Leg {}: {} - {} {}h {}m ({} gallons)</li>\n",
            leg.index,
            escape(&leg.from),
            escape(&leg.to),
            leg.hours,
            leg.minutes,
            whole(leg.gallons)
        ));
    }
    out.push_str("</ul>\n");

    out.push_str(&format!(
        "<p>Total Flight Time: {}h {}m<br>\nTotal Fuel Used: {} gallons",
        estimate.total_hours,
        estimate.remaining_minutes,
        whole(estimate.total_fuel_gallons)
    ));
    if estimate.include_apu && estimate.active_legs_count > 0 {
        let plural = if estimate.active_legs_count > 1 { "s" } else { "" };
        out.push_str(&format!(
            "<br>\n<em>Includes {} lbs APU burn for {} active leg{}</em>",
            whole(estimate.total_apu_fuel),
            estimate.active_legs_count,
            plural
        ));
    }
    out.push_str("</p>\n");

    out.push_str("<h3>Estimate</h3>\n<ul>\n");
    for crew in &estimate.crew_details {
        out.push_str(&format!(
            "<li>{} {} day(s) @ ${}</li>\n",
            escape(&crew.role),
            crew.days,
            currency(crew.rate)
        ));
    }
    out.push_str(&format!(
        "<li>Crew Day Rate Subtotal: ${}</li>\n",
        currency(estimate.crew_day_total)
    ));
    if estimate.crew_expenses_total > Decimal::ZERO {
        out.push_str(&format!(
            "<li>Crew Expenses: ${}</li>\n",
            currency(estimate.crew_expenses_total)
        ));
    }
    out.push_str(&format!(
        "<li>Crew Subtotal: ${}</li>\n",
        currency(estimate.crew_subtotal)
    ));
    if estimate.hourly_subtotal > Decimal::ZERO {
        out.push_str(&format!(
            "<li>Hourly Subtotal (Programs &amp; Reserves): ${}</li>\n",
            currency(estimate.hourly_subtotal)
        ));
    }
    out.push_str(&format!(
        "<li>Fuel Subtotal: ${} ({} gallons @ ${})</li>\n",
        currency(estimate.fuel_subtotal),
        whole(estimate.total_fuel_gallons),
        currency(estimate.fuel_price)
    ));
    if estimate.airport_subtotal > Decimal::ZERO {
        out.push_str(&format!(
            "<li>Airport &amp; Ground Subtotal: ${}</li>\n",
            currency(estimate.airport_subtotal)
        ));
    }
    if estimate.misc_subtotal > Decimal::ZERO {
        out.push_str(&format!(
            "<li>Miscellaneous Subtotal: ${}</li>\n",
            currency(estimate.misc_subtotal)
        ));
    }
    out.push_str("</ul>\n");

    out.push_str(&format!(
        "<p><strong>Estimated Total: ${}</strong></p>\n",
        currency(estimate.estimated_total)
    ));

    if !estimate.trip_notes.is_empty() {
        out.push_str(&format!(
            "<p>Trip Notes:<br>\n{}</p>\n",
            escape(&estimate.trip_notes)
        ));
    }

    out
}

/// Formats a dollar amount: two decimals, comma thousands separators.
fn currency(value: Decimal) -> String {
    let mut rounded = round_half_up(value);
    rounded.rescale(2);
    let text = rounded.to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    // rescale(2) guarantees a fractional part.
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));
    format!("{}{}.{}", sign, group_thousands(int_part), frac_part)
}

/// Formats a quantity with no decimal places (gallons, APU pounds).
fn whole(value: Decimal) -> String {
    value
        .round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
        .to_string()
}

/// Formats fractional flight hours with exactly two decimals.
fn two_dp(value: Decimal) -> String {
    let mut rounded = round_half_up(value);
    rounded.rescale(2);
    rounded.to_string()
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
