#![allow(dead_code)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Nested numeric fixture exercised by the tolerance comparison tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub label: String,
    pub samples: Vec<f64>,
    pub moments: BTreeMap<String, f64>,
}

pub fn sample_measurement() -> Measurement {
    let mut moments = BTreeMap::new();
    moments.insert("mean".to_string(), 0.25);
    moments.insert("variance".to_string(), 1.5);
    Measurement {
        label: "t1_seed0".to_string(),
        samples: vec![0.0, 0.5, 1.0, 1.5],
        moments,
    }
}

pub fn perturbed_measurement(eps: f64) -> Measurement {
    let mut measurement = sample_measurement();
    measurement.samples[2] += eps;
    measurement
}

pub fn encode_id(n: &u32) -> String {
    format!("{n:04}")
}

pub fn decode_id(text: &String) -> u32 {
    text.parse().unwrap_or(0)
}
