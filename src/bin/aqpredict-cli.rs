//! CLI utility that validates five readings and requests one prediction.

use aqpredict::config::{self, EndpointSettings};
use aqpredict::prediction::{
    FieldName, FormState, HttpPredictionGateway, PredictionGateway, present,
};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let Some(options) = parse_args(std::env::args().skip(1).collect())? else {
        return Ok(());
    };
    if let Err(err) = aqpredict::logging::init_stderr() {
        eprintln!("Logging disabled: {err}");
    }
    let headline = predict_with(options, http_gateway)?;
    println!("{headline}");
    Ok(())
}

/// Validate the readings, then ask the gateway built by `connect` for a label.
///
/// `connect` is only called once every field is valid.
fn predict_with<F>(options: Options, connect: F) -> Result<String, String>
where
    F: FnOnce(Option<String>) -> Result<Box<dyn PredictionGateway>, String>,
{
    let validation = options.form.validate();
    let Some(request) = validation.request() else {
        let messages: Vec<String> = validation
            .errors()
            .into_iter()
            .map(|(field, message)| format!("--{}: {message}", flag_name(field)))
            .collect();
        return Err(messages.join("\n"));
    };
    let gateway = connect(options.endpoint)?;
    let response = gateway
        .predict(&request)
        .map_err(|err| format!("Prediction failed: {err}"))?;
    Ok(match present(Some(&response.prediction)) {
        Some(view) => view.headline,
        None => "Prediction service returned an empty label".to_string(),
    })
}

fn http_gateway(endpoint_override: Option<String>) -> Result<Box<dyn PredictionGateway>, String> {
    let mut endpoint = match config::load_or_default() {
        Ok(settings) => settings.endpoint,
        Err(err) => {
            tracing::warn!("Using default endpoint settings: {err}");
            EndpointSettings::default()
        }
    };
    if let Some(url) = endpoint_override {
        endpoint.url = url;
    }
    let gateway = HttpPredictionGateway::from_settings(&endpoint).map_err(|err| err.to_string())?;
    tracing::info!("Requesting prediction from {}", gateway.url());
    Ok(Box::new(gateway))
}

#[derive(Default)]
struct Options {
    form: FormState,
    endpoint: Option<String>,
}

fn flag_name(field: FieldName) -> String {
    field.key().replace('_', "-")
}

fn parse_args(args: Vec<String>) -> Result<Option<Options>, String> {
    let mut options = Options::default();
    let mut idx = 0usize;
    while idx < args.len() {
        let arg = args[idx].as_str();
        match arg {
            "-h" | "--help" => {
                println!("{}", help_text());
                return Ok(None);
            }
            "--endpoint" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| "--endpoint requires a value".to_string())?;
                options.endpoint = Some(value.to_string());
            }
            flag => {
                let field = flag
                    .strip_prefix("--")
                    .map(|name| name.replace('-', "_"))
                    .and_then(|key| FieldName::from_key(&key))
                    .ok_or_else(|| format!("Unknown argument: {flag}\n\n{}", help_text()))?;
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| format!("{flag} requires a value"))?;
                options.form.set_raw(field, value.as_str());
            }
        }
        idx += 1;
    }
    Ok(Some(options))
}

fn help_text() -> String {
    let mut text = String::from(
        "aqpredict-cli\n\nUsage:\n  aqpredict-cli --temperature <C> --co <ppm> --no2 <ppb> --humidity <%> --pop-density <per km2> [--endpoint <url>]\n\nFields:\n",
    );
    for field in FieldName::ALL {
        let rule = field.rule();
        text.push_str(&format!(
            "  --{:<14} {} [{}, {}]\n",
            flag_name(field),
            rule.label,
            rule.min,
            rule.max
        ));
    }
    text.push_str("\nThe endpoint defaults to the one in config.toml.");
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use aqpredict::prediction::{PredictionError, PredictionRequest, PredictionResponse};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingGateway {
        calls: Arc<Mutex<Vec<PredictionRequest>>>,
    }

    impl PredictionGateway for RecordingGateway {
        fn predict(
            &self,
            request: &PredictionRequest,
        ) -> Result<PredictionResponse, PredictionError> {
            self.calls.lock().unwrap().push(*request);
            Ok(PredictionResponse {
                prediction: "Good".to_string(),
            })
        }
    }

    fn connect_to(
        gateway: &RecordingGateway,
        seen_endpoint: &Arc<Mutex<Option<Option<String>>>>,
    ) -> impl FnOnce(Option<String>) -> Result<Box<dyn PredictionGateway>, String> {
        let gateway = gateway.clone();
        let seen_endpoint = seen_endpoint.clone();
        move |endpoint| {
            *seen_endpoint.lock().unwrap() = Some(endpoint);
            Ok(Box::new(gateway) as Box<dyn PredictionGateway>)
        }
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn parses_all_fields_and_endpoint() {
        let options = parse_args(args(&[
            "--temperature",
            "25",
            "--co",
            "5",
            "--no2",
            "40",
            "--humidity",
            "60",
            "--pop-density",
            "1000",
            "--endpoint",
            "http://localhost:10000/predict",
        ]))
        .unwrap()
        .unwrap();
        assert_eq!(options.form.raw(FieldName::PopDensity), "1000");
        assert_eq!(
            options.endpoint.as_deref(),
            Some("http://localhost:10000/predict")
        );
        assert!(options.form.validate().is_submittable());
    }

    #[test]
    fn missing_fields_fail_validation() {
        let options = parse_args(args(&["--temperature", "25"])).unwrap().unwrap();
        let validation = options.form.validate();
        assert_eq!(validation.errors().len(), 4);
    }

    #[test]
    fn rejects_unknown_flags_and_missing_values() {
        assert!(parse_args(args(&["--pm25", "3"])).is_err());
        assert!(parse_args(args(&["--co"])).is_err());
        assert!(parse_args(args(&["--endpoint"])).is_err());
    }

    #[test]
    fn invalid_input_is_reported_before_connecting() {
        let gateway = RecordingGateway::default();
        let seen_endpoint = Arc::new(Mutex::new(None));
        let options = parse_args(args(&[
            "--temperature",
            "-60",
            "--co",
            "5",
            "--no2",
            "abc",
            "--humidity",
            "60",
        ]))
        .unwrap()
        .unwrap();

        let err = predict_with(options, connect_to(&gateway, &seen_endpoint)).unwrap_err();

        assert_eq!(
            err,
            "--temperature: Temperature must be at least -50°C\n\
             --no2: NO2 must be a number\n\
             --pop-density: Population Density is required"
        );
        assert!(seen_endpoint.lock().unwrap().is_none());
        assert!(gateway.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn valid_input_sends_one_request_and_returns_headline() {
        let gateway = RecordingGateway::default();
        let seen_endpoint = Arc::new(Mutex::new(None));
        let options = parse_args(args(&[
            "--temperature",
            "25",
            "--co",
            "5",
            "--no2",
            "40",
            "--humidity",
            "60",
            "--pop-density",
            "1000",
            "--endpoint",
            "http://127.0.0.1:9/predict",
        ]))
        .unwrap()
        .unwrap();

        let headline = predict_with(options, connect_to(&gateway, &seen_endpoint)).unwrap();

        assert_eq!(headline, "Air Quality is Good");
        assert_eq!(
            *seen_endpoint.lock().unwrap(),
            Some(Some("http://127.0.0.1:9/predict".to_string()))
        );
        let calls = gateway.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].pop_density, 1000.0);
    }

    #[test]
    fn flag_names_use_dashes() {
        assert_eq!(flag_name(FieldName::PopDensity), "pop-density");
        assert_eq!(flag_name(FieldName::No2), "no2");
    }
}
