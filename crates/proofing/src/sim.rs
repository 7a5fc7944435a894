//! The proofing simulation state machine.

use fermentation::{doubling_time, Recipe};
use units::Time;

use crate::milestone::{MilestoneLabel, MilestoneLog};
use crate::phase::Phase;

/// When a run counts as over-proofed.
///
/// Both thresholds are empirical: dough structure fails around 3.5x its
/// initial volume, and a run that drags past six doubling times has
/// exhausted its gluten no matter what the volume curve says. Either
/// trigger alone collapses the dough.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollapseRule {
    /// Volume ratio at which the structure fails
    pub volume_ratio: f64,
    /// Elapsed time, in multiples of the doubling time, after which the
    /// run collapses regardless of volume
    pub doubling_time_factor: f64,
}

impl Default for CollapseRule {
    fn default() -> Self {
        Self {
            volume_ratio: 3.5,
            doubling_time_factor: 6.0,
        }
    }
}

impl CollapseRule {
    /// Evaluate the rule for the current tick.
    pub fn should_collapse(&self, volume_ratio: f64, elapsed: Time, doubling: Time) -> bool {
        if volume_ratio >= self.volume_ratio {
            return true;
        }

        doubling.is_finite()
            && doubling.to_minutes() > 0.0
            && elapsed.to_minutes() > self.doubling_time_factor * doubling.to_minutes()
    }
}

/// Time-stepped dough proofing simulation.
///
/// The engine owns its run state — elapsed time, volume ratio, phase and
/// milestone ledger — and a driving doubling time, either derived from a
/// [`Recipe`] through the fermentation model or overridden with an explicit
/// target ("double in exactly 3 h 30 m"). It is driven from outside by a
/// periodic scheduler calling [`ProofingSim::tick`]; see the crate docs for
/// the tick sequence.
///
/// # Example
/// ```
/// use proofing::ProofingSim;
/// use units::Time;
///
/// let mut sim = ProofingSim::new(Time::from_minutes(60.0));
/// assert!(sim.start());
///
/// // One coarse tick straight past both growth milestones
/// sim.tick(Time::from_minutes(100.0));
/// assert_eq!(sim.volume_ratio(), 2f64.powf(100.0 / 60.0));
/// assert_eq!(sim.milestones().len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct ProofingSim {
    /// Doubling time derived from the recipe (or given at construction)
    recipe_doubling_time: Time,
    /// Explicit target doubling time, taking precedence while set
    target_override: Option<Time>,
    elapsed: Time,
    volume_ratio: f64,
    phase: Phase,
    milestones: MilestoneLog,
    collapse: CollapseRule,
}

impl ProofingSim {
    /// Create an idle simulation driven by an explicit doubling time.
    pub fn new(doubling: Time) -> Self {
        Self {
            recipe_doubling_time: doubling,
            target_override: None,
            elapsed: Time::zero(),
            volume_ratio: 1.0,
            phase: Phase::Idle,
            milestones: MilestoneLog::new(),
            collapse: CollapseRule::default(),
        }
    }

    /// Create an idle simulation for a recipe, deriving its doubling time
    /// through the fermentation model.
    pub fn for_recipe(recipe: &Recipe) -> Self {
        Self::new(doubling_time(recipe))
    }

    /// Replace the collapse rule. Intended for construction time; the rule
    /// applies from the next tick.
    pub fn with_collapse_rule(mut self, rule: CollapseRule) -> Self {
        self.collapse = rule;
        self
    }

    /// The doubling time currently driving the run: the explicit target if
    /// one is set, otherwise the recipe-derived value.
    pub fn doubling_time(&self) -> Time {
        self.target_override.unwrap_or(self.recipe_doubling_time)
    }

    /// The explicit target doubling time, if one is set.
    pub fn target(&self) -> Option<Time> {
        self.target_override
    }

    /// Set an explicit target doubling time. Takes precedence over the
    /// recipe-derived value until [`ProofingSim::clear_target`]. Ignored
    /// while running — the driving value is fixed for the duration of a run.
    pub fn set_target(&mut self, target: Time) {
        if self.phase != Phase::Running {
            self.target_override = Some(target);
        }
    }

    /// Drop the explicit target and fall back to the recipe-derived value.
    pub fn clear_target(&mut self) {
        if self.phase != Phase::Running {
            self.target_override = None;
        }
    }

    /// Re-derive the doubling time from changed recipe parameters. Only
    /// applies while idle; preventing parameter changes mid-run is the
    /// caller's responsibility and the engine ignores them.
    pub fn update_recipe(&mut self, recipe: &Recipe) {
        if self.phase == Phase::Idle {
            self.recipe_doubling_time = doubling_time(recipe);
        }
    }

    /// Begin (or resume) the run.
    ///
    /// Refused — returning false — once collapsed, or when the driving
    /// doubling time is unbounded and there is nothing to simulate.
    pub fn start(&mut self) -> bool {
        if self.phase.is_terminal() || !self.doubling_time().is_finite() {
            return false;
        }
        self.phase = Phase::Running;
        true
    }

    /// Suspend the run, keeping elapsed time and milestones. Resuming with
    /// [`ProofingSim::start`] continues from the current elapsed time; no
    /// ticks are queued or replayed across the pause.
    pub fn pause(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Idle;
        }
    }

    /// Advance the run by a span of simulated time.
    ///
    /// Does nothing unless running. The volume ratio is recomputed from the
    /// new elapsed time, collapse is evaluated first, and growth milestones
    /// are only recorded on ticks that do not collapse.
    pub fn tick(&mut self, delta: Time) {
        if self.phase != Phase::Running {
            return;
        }

        let doubling = self.doubling_time();
        self.elapsed = self.elapsed + delta;
        self.volume_ratio = 2f64.powf(self.elapsed / doubling);

        if self
            .collapse
            .should_collapse(self.volume_ratio, self.elapsed, doubling)
        {
            self.milestones.record(MilestoneLabel::Collapsed, self.elapsed);
            self.phase = Phase::Collapsed;
            return;
        }

        for label in [MilestoneLabel::Doubled, MilestoneLabel::Tripled] {
            if let Some(threshold) = label.volume_threshold() {
                if self.volume_ratio >= threshold {
                    self.milestones.record(label, self.elapsed);
                }
            }
        }
    }

    /// Return to a fresh idle state: zero elapsed time, unit volume, empty
    /// ledger. Always allowed, including from the collapsed phase. The
    /// driving doubling time (and any explicit target) is left in place.
    pub fn reset(&mut self) {
        self.elapsed = Time::zero();
        self.volume_ratio = 1.0;
        self.phase = Phase::Idle;
        self.milestones.clear();
    }

    /// Elapsed simulated time this run.
    pub fn elapsed(&self) -> Time {
        self.elapsed
    }

    /// Current volume relative to the initial volume (1.0 at start).
    pub fn volume_ratio(&self) -> f64 {
        self.volume_ratio
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether ticks currently advance the run.
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Whether the dough has over-proofed.
    pub fn is_collapsed(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Milestones recorded this run, in crossing order.
    pub fn milestones(&self) -> &MilestoneLog {
        &self.milestones
    }

    /// The collapse rule in effect.
    pub fn collapse_rule(&self) -> CollapseRule {
        self.collapse
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use units::Temperature;

    #[test]
    fn new_sim_starts_fresh() {
        let sim = ProofingSim::new(Time::from_minutes(60.0));
        assert_eq!(sim.phase(), Phase::Idle);
        assert_eq!(sim.elapsed().to_minutes(), 0.0);
        assert_eq!(sim.volume_ratio(), 1.0);
        assert!(sim.milestones().is_empty());
    }

    #[test]
    fn start_is_refused_for_unproofable_dough() {
        let recipe = Recipe::new(0.0, 2.8, 63.0, Temperature::from_celsius(24.0));
        let mut sim = ProofingSim::for_recipe(&recipe);

        assert!(sim.doubling_time().is_infinite());
        assert!(!sim.start());
        assert_eq!(sim.phase(), Phase::Idle);
    }

    #[test]
    fn ticks_are_ignored_unless_running() {
        let mut sim = ProofingSim::new(Time::from_minutes(60.0));

        sim.tick(Time::from_minutes(10.0));
        assert_eq!(sim.elapsed().to_minutes(), 0.0);

        sim.start();
        sim.tick(Time::from_minutes(10.0));
        assert_eq!(sim.elapsed().to_minutes(), 10.0);

        sim.pause();
        sim.tick(Time::from_minutes(10.0));
        assert_eq!(sim.elapsed().to_minutes(), 10.0);
    }

    #[test]
    fn pause_and_resume_continue_from_elapsed_time() {
        let mut sim = ProofingSim::new(Time::from_minutes(60.0));
        sim.start();
        sim.tick(Time::from_minutes(30.0));

        sim.pause();
        assert_eq!(sim.phase(), Phase::Idle);

        assert!(sim.start());
        sim.tick(Time::from_minutes(30.0));
        assert_eq!(sim.elapsed().to_minutes(), 60.0);
        assert_relative_eq!(sim.volume_ratio(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn volume_follows_the_growth_curve() {
        let mut sim = ProofingSim::new(Time::from_minutes(60.0));
        sim.start();

        sim.tick(Time::from_minutes(30.0));
        assert_relative_eq!(sim.volume_ratio(), 2f64.sqrt(), epsilon = 1e-12);

        sim.tick(Time::from_minutes(30.0));
        assert_relative_eq!(sim.volume_ratio(), 2.0, epsilon = 1e-12);
        assert!(sim.milestones().contains(MilestoneLabel::Doubled));
    }

    #[test]
    fn elapsed_and_volume_never_decrease_while_running() {
        let mut sim = ProofingSim::new(Time::from_minutes(90.0));
        sim.start();

        let mut last_elapsed = sim.elapsed().to_minutes();
        let mut last_volume = sim.volume_ratio();
        while sim.is_running() {
            sim.tick(Time::from_minutes(5.0));
            assert!(sim.elapsed().to_minutes() >= last_elapsed);
            assert!(sim.volume_ratio() >= last_volume);
            last_elapsed = sim.elapsed().to_minutes();
            last_volume = sim.volume_ratio();
        }
        assert!(sim.is_collapsed());
    }

    #[test]
    fn growth_milestones_record_once() {
        let mut sim = ProofingSim::new(Time::from_minutes(60.0));
        sim.start();

        // Cross 2x, then keep ticking over the same threshold
        sim.tick(Time::from_minutes(61.0));
        sim.tick(Time::from_minutes(1.0));
        sim.tick(Time::from_minutes(1.0));

        let doubled: Vec<_> = sim
            .milestones()
            .iter()
            .filter(|m| m.label == MilestoneLabel::Doubled)
            .collect();
        assert_eq!(doubled.len(), 1);
        assert_eq!(doubled[0].time.to_minutes(), 61.0);
    }

    #[test]
    fn coarse_tick_can_record_both_growth_milestones() {
        let mut sim = ProofingSim::new(Time::from_minutes(60.0));
        sim.start();

        // 2^(100/60) = 3.17: past 3x but short of the 3.5x collapse
        sim.tick(Time::from_minutes(100.0));

        assert!(!sim.is_collapsed());
        let labels: Vec<_> = sim.milestones().iter().map(|m| m.label).collect();
        assert_eq!(labels, vec![MilestoneLabel::Doubled, MilestoneLabel::Tripled]);
        assert_eq!(sim.milestones().entries()[0].time.to_minutes(), 100.0);
    }

    #[test]
    fn collapse_suppresses_growth_milestones_on_the_same_tick() {
        let mut sim = ProofingSim::new(Time::from_minutes(60.0));
        sim.start();

        // One 120-minute tick: volume 2^2 = 4.0 >= 3.5
        sim.tick(Time::from_minutes(120.0));

        assert!(sim.is_collapsed());
        assert_eq!(sim.phase(), Phase::Collapsed);
        assert_relative_eq!(sim.volume_ratio(), 4.0, epsilon = 1e-12);

        let labels: Vec<_> = sim.milestones().iter().map(|m| m.label).collect();
        assert_eq!(labels, vec![MilestoneLabel::Collapsed]);
        assert_eq!(sim.milestones().last().unwrap().time.to_minutes(), 120.0);
    }

    #[test]
    fn collapse_is_terminal_until_reset() {
        let mut sim = ProofingSim::new(Time::from_minutes(60.0));
        sim.start();
        sim.tick(Time::from_minutes(120.0));
        assert!(sim.is_collapsed());

        // Further ticks and starts are refused
        sim.tick(Time::from_minutes(10.0));
        assert_eq!(sim.elapsed().to_minutes(), 120.0);
        assert!(!sim.start());

        sim.reset();
        assert_eq!(sim.phase(), Phase::Idle);
        assert!(sim.start());
    }

    #[test]
    fn time_backstop_collapses_a_flat_run() {
        // Raise the amplitude threshold out of reach so only the
        // six-doubling-times backstop can fire.
        let rule = CollapseRule {
            volume_ratio: f64::INFINITY,
            doubling_time_factor: 6.0,
        };
        let mut sim = ProofingSim::new(Time::from_minutes(100.0)).with_collapse_rule(rule);
        sim.start();

        sim.tick(Time::from_minutes(600.0));
        assert!(!sim.is_collapsed(), "600 is not past 6 doubling times");

        sim.tick(Time::from_minutes(1.0));
        assert!(sim.is_collapsed());
        assert_eq!(sim.milestones().last().unwrap().time.to_minutes(), 601.0);
    }

    #[test]
    fn amplitude_trigger_fires_long_before_the_backstop() {
        let mut sim = ProofingSim::new(Time::from_minutes(100.0));
        sim.start();

        while sim.is_running() {
            sim.tick(Time::from_minutes(10.0));
        }

        // 3.5x is crossed near 181 minutes, far short of the 600-minute
        // backstop.
        let collapse = sim.milestones().last().unwrap();
        assert_eq!(collapse.label, MilestoneLabel::Collapsed);
        assert_eq!(collapse.time.to_minutes(), 190.0);
    }

    #[test]
    fn reset_restores_initial_state_and_is_idempotent() {
        let mut sim = ProofingSim::new(Time::from_minutes(60.0));
        sim.start();
        sim.tick(Time::from_minutes(120.0));
        assert!(sim.is_collapsed());

        sim.reset();
        let once = (
            sim.elapsed().to_minutes(),
            sim.volume_ratio(),
            sim.phase(),
            sim.milestones().len(),
        );
        sim.reset();
        let twice = (
            sim.elapsed().to_minutes(),
            sim.volume_ratio(),
            sim.phase(),
            sim.milestones().len(),
        );

        assert_eq!(once, (0.0, 1.0, Phase::Idle, 0));
        assert_eq!(twice, once);
    }

    #[test]
    fn target_overrides_the_recipe_derived_time() {
        let mut sim = ProofingSim::for_recipe(&Recipe::neapolitan());
        let derived = sim.doubling_time();

        sim.set_target(Time::from_hours_minutes(3.0, 30.0));
        assert_eq!(sim.doubling_time().to_minutes(), 210.0);

        sim.clear_target();
        assert_eq!(sim.doubling_time(), derived);
    }

    #[test]
    fn driving_time_is_fixed_while_running() {
        let mut sim = ProofingSim::new(Time::from_minutes(60.0));
        sim.start();

        sim.set_target(Time::from_minutes(10.0));
        assert_eq!(sim.doubling_time().to_minutes(), 60.0);

        let faster = Recipe::new(3.0, 0.0, 100.0, Temperature::from_celsius(38.0));
        sim.update_recipe(&faster);
        assert_eq!(sim.doubling_time().to_minutes(), 60.0);

        sim.pause();
        sim.update_recipe(&faster);
        assert!(sim.doubling_time().to_minutes() < 60.0);
    }

    #[test]
    fn target_enables_starting_an_unproofable_recipe() {
        let recipe = Recipe::new(0.0, 2.8, 63.0, Temperature::from_celsius(24.0));
        let mut sim = ProofingSim::for_recipe(&recipe);
        assert!(!sim.start());

        sim.set_target(Time::from_minutes(90.0));
        assert!(sim.start());
    }
}
