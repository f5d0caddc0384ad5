//! Two-level day → hour-interval control for heatmap layer sets.
//!
//! The day buttons sit above an interval slider.  Picking a day shows its
//! first interval and replaces every slider step with steps for that day;
//! nothing from the previous day survives in the slider.
//!
//! ```text
//!            select_day(d)                    select_step(i)
//!   ┌──────────────────────────┐        ┌────────────────────┐
//!   │ active_day  = d          │        │ active_step = i    │
//!   │ active_step = 0          │        │ mask = steps[i]    │
//!   │ steps = steps_for(d)     │        └────────────────────┘
//!   └──────────────────────────┘
//! ```

use ct_core::{DayOfWeek, HourInterval};

use crate::heatmap::heatmap_title;
use crate::{
    compute_mask, DimValue, Dimension, LayerError, LayerResult, LayerSet, Selection,
    VisibilityMask,
};

/// One slider position: a single (day, interval) heatmap.
#[derive(Clone, Debug, PartialEq)]
pub struct IntervalStep {
    /// `"21-23h"`.
    pub label:    String,
    pub day:      DayOfWeek,
    pub interval: HourInterval,
    pub title:    String,
    pub mask:     VisibilityMask,
}

/// One day button with the slider it installs.
#[derive(Clone, Debug, PartialEq)]
pub struct DayOption {
    pub day:   DayOfWeek,
    pub label: String,
    /// Mask and title of the day's first interval.
    pub mask:  VisibilityMask,
    pub title: String,
    pub steps: Vec<IntervalStep>,
}

/// What a control action produced.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlEvent {
    /// A day was picked.  `steps` replaces the whole slider.
    Regenerated {
        day:   DayOfWeek,
        mask:  VisibilityMask,
        title: String,
        steps: Vec<IntervalStep>,
    },
    /// A slider step was picked.
    StepSelected {
        index: usize,
        mask:  VisibilityMask,
        title: String,
    },
}

/// Day/interval control state.  Starts on the first day's first interval.
#[derive(Clone, Debug, PartialEq)]
pub struct IntervalControls {
    days:        Vec<DayOption>,
    active_day:  usize,
    active_step: usize,
    steps:       Vec<IntervalStep>,
}

impl IntervalControls {
    /// Controls for a `[Day, Interval(w)]` layer set.
    ///
    /// Returns `Ok(None)` when the set holds no data layers.  Each day's
    /// slider lists the intervals present for that day.
    ///
    /// # Errors
    ///
    /// [`LayerError::NotDayInterval`] for any other dimension layout.
    pub fn build(layers: &LayerSet) -> LayerResult<Option<Self>> {
        let dims = layers.dimensions();
        if !matches!(dims, [Dimension::Day, Dimension::Interval(_)]) {
            return Err(LayerError::NotDayInterval(dims.to_vec()));
        }
        if layers.is_placeholder() || layers.data_layers().next().is_none() {
            return Ok(None);
        }

        let mut days: Vec<DayOption> = Vec::new();
        for key in layers.groups() {
            let (DimValue::Day(day), DimValue::Interval(interval)) = (&key[0], &key[1]) else {
                continue;
            };
            let step = step_for(layers, *day, *interval)?;
            if let Some(opt) = days.last_mut().filter(|o| o.day == *day) {
                opt.steps.push(step);
            } else {
                days.push(DayOption {
                    day:   *day,
                    label: day.to_string(),
                    mask:  step.mask.clone(),
                    title: step.title.clone(),
                    steps: vec![step],
                });
            }
        }

        let Some(first) = days.first() else {
            return Ok(None);
        };
        let steps = first.steps.clone();
        log::debug!("interval controls over {} days", days.len());
        Ok(Some(Self { days, active_day: 0, active_step: 0, steps }))
    }

    pub fn days(&self) -> &[DayOption] {
        &self.days
    }

    /// Steps currently on the slider.
    pub fn steps(&self) -> &[IntervalStep] {
        &self.steps
    }

    pub fn active_day(&self) -> DayOfWeek {
        self.days[self.active_day].day
    }

    pub fn active_step(&self) -> usize {
        self.active_step
    }

    pub fn current_mask(&self) -> &VisibilityMask {
        &self.steps[self.active_step].mask
    }

    pub fn current_title(&self) -> &str {
        &self.steps[self.active_step].title
    }

    /// Switch to `day`, resetting the slider to that day's intervals.
    ///
    /// # Errors
    ///
    /// [`LayerError::UnknownDay`] if no layer carries `day`.  State is left
    /// unchanged.
    pub fn select_day(&mut self, day: DayOfWeek) -> LayerResult<ControlEvent> {
        let idx = self
            .days
            .iter()
            .position(|o| o.day == day)
            .ok_or(LayerError::UnknownDay(day))?;
        let opt = &self.days[idx];
        self.active_day = idx;
        self.active_step = 0;
        self.steps = opt.steps.clone();
        Ok(ControlEvent::Regenerated {
            day,
            mask:  opt.mask.clone(),
            title: opt.title.clone(),
            steps: self.steps.clone(),
        })
    }

    /// Move the slider to step `index` of the active day.
    ///
    /// # Errors
    ///
    /// [`LayerError::StepOutOfRange`] past the last step.
    pub fn select_step(&mut self, index: usize) -> LayerResult<ControlEvent> {
        let step = self
            .steps
            .get(index)
            .ok_or(LayerError::StepOutOfRange { index, len: self.steps.len() })?;
        let event = ControlEvent::StepSelected {
            index,
            mask:  step.mask.clone(),
            title: step.title.clone(),
        };
        self.active_step = index;
        Ok(event)
    }
}

fn step_for(layers: &LayerSet, day: DayOfWeek, interval: HourInterval) -> LayerResult<IntervalStep> {
    let dims = layers.dimensions();
    let selection = Selection::all(dims)
        .only(Dimension::Day, [day])?
        .only(dims[1], [interval])?;
    Ok(IntervalStep {
        label: interval.short_label(),
        day,
        interval,
        title: heatmap_title(day, interval),
        mask: compute_mask(layers, &selection)?,
    })
}
