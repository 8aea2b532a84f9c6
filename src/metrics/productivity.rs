use crate::core::numeric::{non_negative, ratio};
use crate::schema::{Person, ProductivityBaseline, ProductivityPostIa};
use serde::Serialize;
use std::collections::HashMap;

/// Time and money saved on one person's share of the task.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PersonSaving {
    pub person_id: String,
    pub baseline_hours: f64,
    pub post_ia_hours: f64,
    /// `(baseline_hours - post_ia_hours) * post_ia hourly rate`
    pub monthly_saving: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ProductivityMetrics {
    pub baseline_hours: f64,
    pub post_ia_hours: f64,
    pub baseline_monthly_cost: f64,
    pub post_ia_monthly_cost: f64,
    /// Hours saved per month across matched people.
    pub delta_hours: f64,
    /// Money saved per month across matched people.
    pub delta_productivity: f64,
    pub productivity_gain_pct: f64,
    pub per_person: Vec<PersonSaving>,
}

fn total_hours(people: &[Person]) -> f64 {
    people.iter().map(Person::hours_per_month).sum()
}

fn total_cost(people: &[Person]) -> f64 {
    people.iter().map(Person::monthly_cost).sum()
}

pub fn compute(baseline: Option<&ProductivityBaseline>, post: &ProductivityPostIa) -> ProductivityMetrics {
    let post_ia_hours = total_hours(&post.people);
    let post_ia_monthly_cost = total_cost(&post.people);

    let Some(baseline) = baseline else {
        return ProductivityMetrics {
            post_ia_hours,
            post_ia_monthly_cost,
            ..Default::default()
        };
    };

    let by_id: HashMap<&str, &Person> = baseline
        .people
        .iter()
        .map(|p| (p.id.as_str(), p))
        .collect();

    // People added only on the Post-IA side have nothing to compare against.
    let per_person: Vec<PersonSaving> = post
        .people
        .iter()
        .filter_map(|after| {
            let before = by_id.get(after.id.as_str())?;
            let baseline_hours = before.hours_per_month();
            let post_ia_hours = after.hours_per_month();
            Some(PersonSaving {
                person_id: after.id.clone(),
                baseline_hours,
                post_ia_hours,
                monthly_saving: (baseline_hours - post_ia_hours) * non_negative(after.hourly_rate),
            })
        })
        .collect();

    let baseline_hours = total_hours(&baseline.people);
    let delta_hours: f64 = per_person
        .iter()
        .map(|s| s.baseline_hours - s.post_ia_hours)
        .sum();

    ProductivityMetrics {
        baseline_hours,
        post_ia_hours,
        baseline_monthly_cost: total_cost(&baseline.people),
        post_ia_monthly_cost,
        delta_hours,
        delta_productivity: per_person.iter().map(|s| s.monthly_saving).sum(),
        productivity_gain_pct: ratio(delta_hours, baseline_hours) * 100.0,
        per_person,
    }
}
