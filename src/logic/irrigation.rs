//! Smart irrigation simulation
//!
//! No hardware behind this. Sensors drift by a clamped random walk on each
//! tick; zones are toggled by hand.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

use crate::logic::detection::RandomSource;
use crate::models::{IrrigationSnapshot, IrrigationZone, SensorReading, WaterUsage, ZoneStatus};

pub const DEFAULT_TICK: Duration = Duration::from_secs(3);

pub const SOIL_MOISTURE_RANGE: (f64, f64) = (20.0, 80.0);
pub const TEMPERATURE_RANGE: (f64, f64) = (20.0, 35.0);
pub const HUMIDITY_RANGE: (f64, f64) = (40.0, 90.0);
pub const WIND_SPEED_RANGE: (f64, f64) = (5.0, 25.0);

/// Probability gate for a rain event on a tick
const RAIN_THRESHOLD: f64 = 0.95;
const MAX_RAINFALL: f64 = 5.0;

pub fn moisture_level(moisture: f64) -> &'static str {
    if moisture < 40.0 {
        "Low - Irrigation Needed"
    } else if moisture < 60.0 {
        "Optimal"
    } else {
        "High - No Irrigation Needed"
    }
}

/// One random-walk step. `step` is the full width of the walk.
fn drift(value: f64, step: f64, (lo, hi): (f64, f64), rng: &dyn RandomSource) -> f64 {
    (value + (rng.next_f64() - 0.5) * step).clamp(lo, hi)
}

pub fn next_reading(prev: &SensorReading, rng: &dyn RandomSource) -> SensorReading {
    let soil_moisture = drift(prev.soil_moisture, 2.0, SOIL_MOISTURE_RANGE, rng);
    let temperature = drift(prev.temperature, 0.5, TEMPERATURE_RANGE, rng);
    let humidity = drift(prev.humidity, 2.0, HUMIDITY_RANGE, rng);
    let rainfall = if rng.next_f64() > RAIN_THRESHOLD {
        rng.next_f64() * MAX_RAINFALL
    } else {
        0.0
    };
    let wind_speed = drift(prev.wind_speed, 1.0, WIND_SPEED_RANGE, rng);

    SensorReading {
        soil_moisture,
        temperature,
        humidity,
        rainfall,
        wind_speed,
    }
}

#[derive(Debug, Clone)]
struct Zone {
    id: u32,
    name: &'static str,
    status: ZoneStatus,
    soil_moisture: f64,
    last_watered: String,
    next_scheduled: &'static str,
}

impl Zone {
    fn new(id: u32, name: &'static str, status: ZoneStatus, soil_moisture: f64, last_watered: &str, next_scheduled: &'static str) -> Self {
        Self {
            id,
            name,
            status,
            soil_moisture,
            last_watered: last_watered.to_string(),
            next_scheduled,
        }
    }

    fn view(&self) -> IrrigationZone {
        IrrigationZone {
            id: self.id,
            name: self.name.to_string(),
            status: self.status,
            soil_moisture: self.soil_moisture,
            moisture_level: moisture_level(self.soil_moisture),
            last_watered: self.last_watered.clone(),
            next_scheduled: self.next_scheduled.to_string(),
        }
    }
}

/// Dashboard state
#[derive(Debug, Clone)]
pub struct IrrigationSystem {
    active: bool,
    sensors: SensorReading,
    zones: Vec<Zone>,
    water_usage: WaterUsage,
}

impl Default for IrrigationSystem {
    fn default() -> Self {
        Self {
            active: true,
            sensors: SensorReading::default(),
            zones: vec![
                Zone::new(1, "North Field - Corn", ZoneStatus::Active, 42.0, "2 hours ago", "Tomorrow 6:00 AM"),
                Zone::new(2, "South Field - Wheat", ZoneStatus::Inactive, 68.0, "5 hours ago", "Tomorrow 7:00 AM"),
                Zone::new(3, "East Field - Vegetables", ZoneStatus::Scheduled, 35.0, "1 hour ago", "Today 4:00 PM"),
                Zone::new(4, "West Field - Fruits", ZoneStatus::Inactive, 55.0, "3 hours ago", "Tomorrow 6:30 AM"),
            ],
            water_usage: WaterUsage::default(),
        }
    }
}

impl IrrigationSystem {
    /// Advance the sensors one tick. No-op while the system is off.
    pub fn tick(&mut self, rng: &dyn RandomSource) {
        if self.active {
            self.sensors = next_reading(&self.sensors, rng);
        }
    }

    /// Flip the master switch, returns the new state
    pub fn toggle_system(&mut self) -> bool {
        self.active = !self.active;
        self.active
    }

    /// Active zones switch off; inactive or scheduled zones switch on.
    pub fn toggle_zone(&mut self, id: u32) -> Option<IrrigationZone> {
        let zone = self.zones.iter_mut().find(|z| z.id == id)?;

        if zone.status == ZoneStatus::Inactive {
            zone.last_watered = "Just now".to_string();
        }
        zone.status = match zone.status {
            ZoneStatus::Active => ZoneStatus::Inactive,
            _ => ZoneStatus::Active,
        };

        Some(zone.view())
    }

    pub fn snapshot(&self) -> IrrigationSnapshot {
        IrrigationSnapshot {
            system_active: self.active,
            sensors: self.sensors,
            zones: self.zones.iter().map(Zone::view).collect(),
            water_usage: self.water_usage,
        }
    }
}

/// Background task advancing the sensors every `every`
pub fn spawn_sensor_loop<R>(system: Arc<Mutex<IrrigationSystem>>, rng: R, every: Duration) -> JoinHandle<()>
where
    R: RandomSource + 'static,
{
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        // First tick completes immediately
        interval.tick().await;

        loop {
            interval.tick().await;
            let mut guard = system.lock();
            guard.tick(&rng);
            tracing::trace!("Irrigation sensors: {:?}", guard.snapshot().sensors);
        }
    })
}
