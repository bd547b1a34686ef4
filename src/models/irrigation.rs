//! Irrigation dashboard model

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    /// Percent
    pub soil_moisture: f64,
    /// Celsius
    pub temperature: f64,
    /// Percent
    pub humidity: f64,
    /// Millimetres over the last tick
    pub rainfall: f64,
    /// km/h
    pub wind_speed: f64,
}

impl Default for SensorReading {
    fn default() -> Self {
        Self {
            soil_moisture: 45.0,
            temperature: 28.0,
            humidity: 65.0,
            rainfall: 0.0,
            wind_speed: 12.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneStatus {
    Active,
    Inactive,
    Scheduled,
}

#[derive(Debug, Clone, Serialize)]
pub struct IrrigationZone {
    pub id: u32,
    pub name: String,
    pub status: ZoneStatus,
    pub soil_moisture: f64,
    pub moisture_level: &'static str,
    pub last_watered: String,
    pub next_scheduled: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct WaterUsage {
    /// Litres
    pub today: u32,
    pub this_week: u32,
    /// Percent
    pub efficiency: u32,
}

impl Default for WaterUsage {
    fn default() -> Self {
        Self {
            today: 1250,
            this_week: 7800,
            efficiency: 92,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IrrigationSnapshot {
    pub system_active: bool,
    pub sensors: SensorReading,
    pub zones: Vec<IrrigationZone>,
    pub water_usage: WaterUsage,
}
