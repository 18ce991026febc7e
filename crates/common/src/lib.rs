pub mod types;
pub mod utils;
pub mod metrics;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_serializes_liveness_marker() {
        let body = serde_json::to_value(types::Health::successful()).unwrap();
        assert_eq!(body, serde_json::json!({"Data": "Successful"}));
    }
}
