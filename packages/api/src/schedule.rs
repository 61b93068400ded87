//! # Planting schedule: month buckets for the calendar view
//!
//! The calendar shows one twelve-month strip per plant. Each month cell can be
//! marked by four kinds of activity ([`ScheduleKind`]):
//!
//! | Kind | Source dates |
//! |------|--------------|
//! | start inside | spring start indoors, fall start indoors |
//! | transplant | spring transplant, fall transplant |
//! | sow outside | spring sow outdoors, fall sow outdoors |
//! | begin harvest | each transplant / sow-outdoors date + the plant's maturity time |
//!
//! Months are zero-based (`0` = January). Empty or unparsable dates are
//! skipped, and a month appears at most once per kind.

use std::collections::BTreeSet;

use chrono::Datelike;

use crate::dates::{add_span, month_index, parse_date};
use crate::models::{Plant, PlantingTimes};

/// Short month labels, indexed by zero-based month.
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Activity categories shown on the calendar strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScheduleKind {
    StartInside,
    Transplant,
    SowOutside,
    BeginHarvest,
}

impl ScheduleKind {
    pub const ALL: [ScheduleKind; 4] = [
        ScheduleKind::StartInside,
        ScheduleKind::Transplant,
        ScheduleKind::SowOutside,
        ScheduleKind::BeginHarvest,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ScheduleKind::StartInside => "Start Inside",
            ScheduleKind::Transplant => "Transplant",
            ScheduleKind::SowOutside => "Sow Outside",
            ScheduleKind::BeginHarvest => "Begin Harvest",
        }
    }

    /// Stable identifier used for CSS modifiers.
    pub fn slug(self) -> &'static str {
        match self {
            ScheduleKind::StartInside => "start-inside",
            ScheduleKind::Transplant => "transplant",
            ScheduleKind::SowOutside => "sow-outside",
            ScheduleKind::BeginHarvest => "begin-harvest",
        }
    }
}

/// Months marked for each [`ScheduleKind`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlantSchedule {
    pub start_inside: BTreeSet<u8>,
    pub transplant: BTreeSet<u8>,
    pub sow_outside: BTreeSet<u8>,
    pub begin_harvest: BTreeSet<u8>,
}

impl PlantSchedule {
    /// Bucket a plant's planting dates by month.
    pub fn for_plant(plant: &Plant) -> Self {
        let times = &plant.planting_times;
        let mut schedule = Self::default();

        let mut add = |kind: ScheduleKind, date: &str| {
            if let Some(month) = month_index(date) {
                schedule.months_mut(kind).insert(month);
            }
        };
        add(ScheduleKind::StartInside, &times.spring_start_indoors);
        add(ScheduleKind::StartInside, &times.fall_start_indoors);
        add(ScheduleKind::Transplant, &times.spring_transplant);
        add(ScheduleKind::Transplant, &times.fall_transplant);
        add(ScheduleKind::SowOutside, &times.spring_sow_outdoors);
        add(ScheduleKind::SowOutside, &times.fall_sow_outdoors);

        let maturity = &plant.quick_info.maturity_time;
        for planted in [
            &times.spring_transplant,
            &times.fall_transplant,
            &times.spring_sow_outdoors,
            &times.fall_sow_outdoors,
        ] {
            if let Some(ready) = parse_date(planted).and_then(|d| add_span(d, maturity)) {
                schedule.begin_harvest.insert(ready.month0() as u8);
            }
        }

        schedule
    }

    pub fn months(&self, kind: ScheduleKind) -> &BTreeSet<u8> {
        match kind {
            ScheduleKind::StartInside => &self.start_inside,
            ScheduleKind::Transplant => &self.transplant,
            ScheduleKind::SowOutside => &self.sow_outside,
            ScheduleKind::BeginHarvest => &self.begin_harvest,
        }
    }

    fn months_mut(&mut self, kind: ScheduleKind) -> &mut BTreeSet<u8> {
        match kind {
            ScheduleKind::StartInside => &mut self.start_inside,
            ScheduleKind::Transplant => &mut self.transplant,
            ScheduleKind::SowOutside => &mut self.sow_outside,
            ScheduleKind::BeginHarvest => &mut self.begin_harvest,
        }
    }

    /// Kinds marked in the given month, in display order.
    pub fn kinds_in_month(&self, month: u8) -> Vec<ScheduleKind> {
        ScheduleKind::ALL
            .into_iter()
            .filter(|kind| self.months(*kind).contains(&month))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        ScheduleKind::ALL
            .into_iter()
            .all(|kind| self.months(kind).is_empty())
    }
}

/// The six named planting dates of a plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlantingEvent {
    SpringStartIndoors,
    SpringTransplant,
    SpringSowOutdoors,
    FallStartIndoors,
    FallTransplant,
    FallSowOutdoors,
}

impl PlantingEvent {
    pub const ALL: [PlantingEvent; 6] = [
        PlantingEvent::SpringStartIndoors,
        PlantingEvent::SpringTransplant,
        PlantingEvent::SpringSowOutdoors,
        PlantingEvent::FallStartIndoors,
        PlantingEvent::FallTransplant,
        PlantingEvent::FallSowOutdoors,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PlantingEvent::SpringStartIndoors => "Spring Start Indoors",
            PlantingEvent::SpringTransplant => "Spring Transplant",
            PlantingEvent::SpringSowOutdoors => "Spring Sow Outdoors",
            PlantingEvent::FallStartIndoors => "Fall Start Indoors",
            PlantingEvent::FallTransplant => "Fall Transplant",
            PlantingEvent::FallSowOutdoors => "Fall Sow Outdoors",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            PlantingEvent::SpringStartIndoors => "spring-start-indoors",
            PlantingEvent::SpringTransplant => "spring-transplant",
            PlantingEvent::SpringSowOutdoors => "spring-sow-outdoors",
            PlantingEvent::FallStartIndoors => "fall-start-indoors",
            PlantingEvent::FallTransplant => "fall-transplant",
            PlantingEvent::FallSowOutdoors => "fall-sow-outdoors",
        }
    }

    pub fn date(self, times: &PlantingTimes) -> &str {
        match self {
            PlantingEvent::SpringStartIndoors => &times.spring_start_indoors,
            PlantingEvent::SpringTransplant => &times.spring_transplant,
            PlantingEvent::SpringSowOutdoors => &times.spring_sow_outdoors,
            PlantingEvent::FallStartIndoors => &times.fall_start_indoors,
            PlantingEvent::FallTransplant => &times.fall_transplant,
            PlantingEvent::FallSowOutdoors => &times.fall_sow_outdoors,
        }
    }
}

/// Named planting events whose date falls in `month`.
pub fn events_in_month(times: &PlantingTimes, month: u8) -> Vec<PlantingEvent> {
    PlantingEvent::ALL
        .into_iter()
        .filter(|event| month_index(event.date(times)) == Some(month))
        .collect()
}

/// Plants whose name contains `term`, ignoring case. An empty term keeps all.
pub fn filter_by_name<'a>(plants: &'a [Plant], term: &str) -> Vec<&'a Plant> {
    let needle = term.trim().to_lowercase();
    plants
        .iter()
        .filter(|p| needle.is_empty() || p.name().to_lowercase().contains(&needle))
        .collect()
}
