use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::common::scenario::CombinedScenario;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    /// `logic`, or `browser:<name>` for a run against a real page.
    pub runner: String,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
    #[serde(with = "duration_vec_serde")]
    pub performance_data: Vec<Duration>,
}

impl ScenarioResult {
    /// Result of a single browser run.
    pub fn single(
        scenario_name: &str,
        runner: String,
        outcome: Result<(), String>,
        duration: Duration,
    ) -> Self {
        let (passed, failures) = match outcome {
            Ok(()) => (true, Vec::new()),
            Err(failure) => (false, vec![failure]),
        };
        Self {
            scenario_name: scenario_name.to_string(),
            runner,
            passed,
            iterations_run: 1,
            successful_iterations: usize::from(passed),
            failures,
            average_duration: duration,
            performance_data: vec![duration],
        }
    }
}

pub struct LogicTester {
    verbose: bool,
}

impl LogicTester {
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Run the scenario's in-memory checks `iterations` times.
    pub fn run_scenario(
        &self,
        scenario: &dyn CombinedScenario,
        iterations: usize,
    ) -> ScenarioResult {
        if self.verbose {
            println!("🧪 Testing scenario: {}", scenario.name().bright_white());
        }

        let mut successes = 0;
        let mut failures = Vec::new();
        let mut performance_data = Vec::with_capacity(iterations);

        for i in 0..iterations {
            let start_time = Instant::now();
            match scenario.run_logic() {
                Ok(()) => {
                    successes += 1;
                    let duration = start_time.elapsed();
                    performance_data.push(duration);
                    if self.verbose {
                        println!("  ✅ Iteration {}/{iterations} passed ({duration:?})", i + 1);
                    }
                }
                Err(err) => {
                    let message = format!("Iteration {}: {err:#}", i + 1);
                    if self.verbose {
                        println!("  ❌ {}", message.clone().red());
                    }
                    failures.push(message);
                }
            }
        }

        let average_duration = if performance_data.is_empty() {
            Duration::ZERO
        } else {
            performance_data.iter().sum::<Duration>()
                / u32::try_from(performance_data.len()).unwrap_or(1)
        };

        ScenarioResult {
            scenario_name: scenario.name().to_string(),
            runner: "logic".to_string(),
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: successes,
            failures,
            average_duration,
            performance_data,
        }
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_micros().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let micros = u128::deserialize(deserializer)?;
        Ok(Duration::from_micros(u64::try_from(micros).unwrap_or(0)))
    }
}

mod duration_vec_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(durations: &[Duration], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let micros: Vec<u128> = durations.iter().map(Duration::as_micros).collect();
        micros.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let micros = Vec::<u128>::deserialize(deserializer)?;
        Ok(micros
            .into_iter()
            .map(|m| Duration::from_micros(u64::try_from(m).unwrap_or(0)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::scenario::get_scenario;

    #[test]
    fn theme_scenario_passes_every_iteration() {
        let scenario = get_scenario("theme").expect("theme scenario");
        let result = LogicTester::new(false).run_scenario(scenario.as_ref(), 3);
        assert!(result.passed, "{:?}", result.failures);
        assert_eq!(result.successful_iterations, 3);
        assert_eq!(result.performance_data.len(), 3);
        assert_eq!(result.runner, "logic");
    }

    #[test]
    fn durations_serialize_as_microseconds() {
        let result = ScenarioResult::single(
            "Smoke Test",
            "browser:chrome".into(),
            Err("bridge missing".into()),
            Duration::from_millis(2),
        );
        let json = serde_json::to_value(&result).expect("serializes");
        assert_eq!(json["average_duration"], 2000);
        assert_eq!(json["successful_iterations"], 0);
        assert_eq!(json["failures"][0], "bridge missing");
    }
}
