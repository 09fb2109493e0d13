//! The mission state machine

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use audio_ranging::ProximitySensor;
use chrono::Utc;
use detection_fusion::{DetectionFusion, VictimRecord};
use flight_link::{FlightLink, Position, Waypoint};
use tracing::{error, info, warn};
use uuid::Uuid;
use vision_detect::{FrameRequest, VisionDetector};

use crate::config::MissionConfig;
use crate::phase::MissionPhase;
use crate::report::{MissionOutcome, MissionReport};
use crate::MissionError;

/// Shared cancellation flag.
///
/// Tripped from outside the mission (operator interrupt, supervisor). The
/// mission honors it at waypoint-loop granularity: the command in flight is
/// allowed to complete, no further waypoints are scheduled, and the
/// land-then-disarm sequence runs unconditionally.
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag(Arc<AtomicBool>);

impl InterruptFlag {
    /// Create an untripped flag
    pub fn new() -> Self {
        Self::default()
    }

    /// Request mission interruption
    pub fn trip(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether interruption has been requested
    pub fn is_tripped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// The search-and-rescue mission.
///
/// Owns the victim list for the duration of one run; records are only ever
/// appended during the search loop and cleared at mission start, so the
/// final report is exactly the accepted fusion output in visit order.
pub struct Mission {
    config: MissionConfig,
    fusion: DetectionFusion,
    interrupt: InterruptFlag,
    phase: MissionPhase,
    home: Option<Position>,
    victims: Vec<VictimRecord>,
    waypoints_planned: usize,
    waypoints_visited: usize,
    rescue_triggered: bool,
}

impl Mission {
    /// Create a mission from configuration
    pub fn new(config: MissionConfig) -> Self {
        let fusion = DetectionFusion::new(config.fusion);
        Self {
            config,
            fusion,
            interrupt: InterruptFlag::new(),
            phase: MissionPhase::Idle,
            home: None,
            victims: Vec::new(),
            waypoints_planned: 0,
            waypoints_visited: 0,
            rescue_triggered: false,
        }
    }

    /// Handle for requesting interruption from another task
    pub fn interrupt_flag(&self) -> InterruptFlag {
        self.interrupt.clone()
    }

    /// Current mission phase
    pub fn phase(&self) -> MissionPhase {
        self.phase
    }

    /// Victim records accepted so far, in visit order
    pub fn victims(&self) -> &[VictimRecord] {
        &self.victims
    }

    /// Execute the complete mission against the given collaborators.
    ///
    /// Always returns a report: fatal errors and interrupts trigger the
    /// best-effort land-then-disarm sequence first, and the report reflects
    /// exactly the victim list accumulated up to termination.
    pub async fn run<F, V, A>(&mut self, flight: &mut F, vision: &mut V, audio: &mut A) -> MissionReport
    where
        F: FlightLink,
        V: VisionDetector,
        A: ProximitySensor,
    {
        let mission_id = Uuid::new_v4();
        let started_at = Utc::now();
        self.phase = MissionPhase::Idle;
        self.home = None;
        self.victims.clear();
        self.waypoints_planned = 0;
        self.waypoints_visited = 0;
        self.rescue_triggered = false;

        info!(%mission_id, area_size_m = self.config.area_size_m, "mission starting");

        let outcome = match self.fly(flight, vision, audio).await {
            Ok(()) => MissionOutcome::Completed,
            Err(MissionError::Interrupted) => {
                warn!("mission interrupted, securing vehicle");
                MissionOutcome::Interrupted
            }
            Err(err) => {
                error!(phase = %self.phase, error = %err, "mission failed, securing vehicle");
                MissionOutcome::Failed(err.to_string())
            }
        };

        // Never connected means nothing to secure; otherwise land and
        // disarm are attempted no matter how the flight ended.
        if self.phase != MissionPhase::Idle {
            self.land_and_disarm(flight).await;
        }

        self.enter(MissionPhase::Reported);
        let report = MissionReport {
            mission_id,
            started_at,
            ended_at: Utc::now(),
            outcome,
            rescue_triggered: self.rescue_triggered,
            waypoints_planned: self.waypoints_planned,
            waypoints_visited: self.waypoints_visited,
            victims: self.victims.clone(),
        };
        info!(victims = report.victim_count(), "mission report generated");
        report
    }

    async fn fly<F, V, A>(
        &mut self,
        flight: &mut F,
        vision: &mut V,
        audio: &mut A,
    ) -> Result<(), MissionError>
    where
        F: FlightLink,
        V: VisionDetector,
        A: ProximitySensor,
    {
        // Idle -> Connected; failure here is fatal, the mission cannot proceed
        let status = flight.connect_and_arm().await?;
        self.enter(MissionPhase::Connected);
        info!(
            armed = status.armed,
            battery = status.battery_percent,
            gps_fix = status.gps_fix,
            "link established"
        );

        // Connected -> Airborne; hover position becomes home for the return leg
        let home = flight.takeoff(self.config.takeoff_altitude_m).await?;
        self.home = Some(home);
        self.enter(MissionPhase::Airborne);
        info!(%home, "takeoff complete");
        self.settle().await;

        // Airborne -> Searching
        let waypoints = coverage_planner::plan(&self.config.sweep_params());
        self.waypoints_planned = waypoints.len();
        self.enter(MissionPhase::Searching);

        for (index, waypoint) in waypoints.iter().enumerate() {
            if self.interrupt.is_tripped() {
                warn!("interrupt requested, abandoning remaining waypoints");
                return Err(MissionError::Interrupted);
            }

            info!(
                waypoint = index + 1,
                total = waypoints.len(),
                x = waypoint.x,
                y = waypoint.y,
                altitude_m = waypoint.altitude_m(),
                "advancing to waypoint"
            );

            match self.survey_waypoint(index, waypoint, flight, vision, audio).await {
                Ok(false) => {}
                Ok(true) => {
                    self.rescue_triggered = true;
                    self.enter(MissionPhase::RescueMode);
                    warn!(
                        waypoint = index + 1,
                        "close-range cue accepted, skipping remaining waypoints"
                    );
                    break;
                }
                // Degraded continuation: this waypoint goes unsensed, the
                // sweep carries on.
                Err(err) => {
                    warn!(
                        waypoint = index + 1,
                        error = %err,
                        "waypoint failed, continuing search"
                    );
                }
            }
        }

        // {Searching | RescueMode} -> Returning
        self.enter(MissionPhase::Returning);
        self.return_to_base(flight).await;
        self.settle().await;
        Ok(())
    }

    /// Navigate to one waypoint and sense there. Returns whether fusion
    /// demanded an abort into rescue mode.
    async fn survey_waypoint<F, V, A>(
        &mut self,
        index: usize,
        waypoint: &Waypoint,
        flight: &mut F,
        vision: &mut V,
        audio: &mut A,
    ) -> Result<bool, MissionError>
    where
        F: FlightLink,
        V: VisionDetector,
        A: ProximitySensor,
    {
        flight.move_to(waypoint).await?;
        self.waypoints_visited += 1;

        let visual = match vision.detect(&FrameRequest::default()).await {
            Ok(events) => events,
            Err(err) => {
                warn!(
                    waypoint = index + 1,
                    error = %err,
                    "detection pass failed, treating as no sighting"
                );
                Vec::new()
            }
        };
        if !visual.is_empty() {
            info!(
                waypoint = index + 1,
                sightings = visual.len(),
                "visual detection at waypoint"
            );
        }

        let position = match flight.position().await {
            Ok(p) => p,
            Err(err) => {
                warn!(error = %err, "position query failed, ranging from waypoint");
                waypoint.position()
            }
        };
        let cue = match audio.sense(&position).await {
            Ok(cue) => cue,
            Err(err) => {
                warn!(
                    waypoint = index + 1,
                    error = %err,
                    "proximity read failed, treating as silence"
                );
                None
            }
        };

        let outcome = self
            .fusion
            .evaluate(index, waypoint.position(), &visual, cue);
        self.victims.extend(outcome.records);
        Ok(outcome.abort)
    }

    async fn return_to_base<F: FlightLink>(&mut self, flight: &mut F) {
        let Some(home) = self.home else {
            return;
        };
        info!(%home, "returning to base");
        let leg = Waypoint::new(home.x, home.y, home.z, self.config.return_speed_mps);
        if let Err(err) = flight.move_to(&leg).await {
            warn!(error = %err, "return to base failed");
        }
    }

    /// The fail-safe sequence: land then disarm, each attempted exactly
    /// once, failures logged but never allowed to block the report.
    async fn land_and_disarm<F: FlightLink>(&mut self, flight: &mut F) {
        if let Err(err) = flight.land().await {
            warn!(error = %err, "landing attempt failed");
        }
        self.enter(MissionPhase::Landed);
        self.settle().await;

        if let Err(err) = flight.disarm().await {
            warn!(error = %err, "disarm attempt failed");
        }
    }

    fn enter(&mut self, phase: MissionPhase) {
        info!(from = %self.phase, to = %phase, "phase transition");
        self.phase = phase;
    }

    async fn settle(&self) {
        let pause = self.config.settle();
        if !pause.is_zero() {
            tokio::time::sleep(pause).await;
        }
    }
}
