pub mod chronometer;
pub mod configuration;
pub mod logger;

use self::{
    chronometer::Chronometer,
    configuration::Configuration,
    logger::{Logger, ProgressLogger},
};
use based58::{base58, base58_check, ValidationError};
use rand::Rng;
use serde::Serialize;
use std::{hint::black_box, process};

const TO_ENCODE: [u8; 64] = [
    217, 209, 11, 117, 20, 116, 176, 35, 106, 179, 68, 60, 223, 114, 201, 199, 74, 254, 15, 14, 253, 15, 137, 41, 116, 68, 148, 190,
    213, 78, 166, 97, 71, 153, 208, 10, 192, 117, 37, 246, 54, 188, 173, 16, 84, 68, 22, 36, 78, 90, 214, 115, 15, 225, 215, 92,
    166, 174, 42, 53, 72, 101, 107, 155,
];

const TO_ENCODE_CHECK: &[u8] = b"hello world";

#[derive(Serialize)]
struct Measurement {
    operation: &'static str,
    input: &'static str,
    input_length: usize,
    iterations: usize,
    nanoseconds_per_operation: f64,
}

#[derive(Serialize)]
struct Report<'a> {
    alphabet: &'a str,
    measurements: Vec<Measurement>,
}

struct Operation<'a> {
    name: &'static str,
    input_name: &'static str,
    input: Vec<u8>,
    run: Box<dyn Fn(&[u8]) -> Result<Vec<u8>, ValidationError> + 'a>,
}

impl<'a> Operation<'a> {
    fn new(
        name: &'static str,
        input_name: &'static str,
        input: Vec<u8>,
        run: impl Fn(&[u8]) -> Result<Vec<u8>, ValidationError> + 'a,
    ) -> Self {
        Self {
            name,
            input_name,
            input,
            run: Box::new(run),
        }
    }
}

fn measure(operation: &Operation, configuration: &Configuration, logger: &Logger) -> Measurement {
    let label = format!("{} {}", operation.name, operation.input_name);
    let mut progress = ProgressLogger::new(label, configuration.iterations(), configuration.log_interval(), logger);
    let chronometer = Chronometer::new();
    for _ in 0..configuration.iterations() {
        let _ = black_box((operation.run)(black_box(operation.input.as_slice())));
        progress.step();
    }
    let elapsed = chronometer.duration().as_nanos() as f64;
    Measurement {
        operation: operation.name,
        input: operation.input_name,
        input_length: operation.input.len(),
        iterations: configuration.iterations(),
        nanoseconds_per_operation: elapsed / configuration.iterations().max(1) as f64,
    }
}

fn operations(configuration: &Configuration) -> Vec<Operation<'_>> {
    let alphabet = configuration.alphabet();
    let encoder = base58::Encoder::new(alphabet);
    let decoder = base58::Decoder::new(alphabet);
    let check_encoder = base58_check::Encoder::new(alphabet);
    let check_decoder = base58_check::Decoder::new(alphabet);

    let mut random = vec![0u8; configuration.random_length()];
    rand::thread_rng().fill(&mut random[..]);

    let mut operations = Vec::new();
    for (input_name, input) in [("fixed", TO_ENCODE.to_vec()), ("random", random)] {
        let encoded = encoder.encode(&input);
        operations.push(Operation::new("encode", input_name, input, move |input| Ok(encoder.encode(input))));
        operations.push(Operation::new("decode", input_name, encoded, move |input| decoder.decode(input)));
    }
    operations.push(Operation::new("encode_check", "fixed", TO_ENCODE_CHECK.to_vec(), move |input| {
        Ok(check_encoder.encode(input))
    }));
    operations.push(Operation::new("decode_check", "fixed", check_encoder.encode(TO_ENCODE_CHECK), move |input| {
        check_decoder.decode(input)
    }));
    operations
}

/// Every decoding operation must give back what its encoding counterpart was fed.
fn verify(operations: &[Operation]) -> Result<(), String> {
    for pair in operations.chunks(2) {
        if let [encode, decode] = pair {
            let encoded = (encode.run)(encode.input.as_slice()).map_err(|err| err.to_string())?;
            if encoded != decode.input {
                return Err(format!("{} {} produced unexpected output", encode.name, encode.input_name));
            }
            let decoded = (decode.run)(decode.input.as_slice()).map_err(|err| err.to_string())?;
            if decoded != encode.input {
                return Err(format!("{} {} did not round trip", decode.name, decode.input_name));
            }
        }
    }
    Ok(())
}

fn main() {
    let configuration = match Configuration::new() {
        Ok(configuration) => configuration,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };

    let logger = Logger::new();
    logger.log(format!(
        "Benchmarking {} iterations with the {} alphabet",
        configuration.iterations(),
        configuration.alphabet_name()
    ));

    let operations = operations(&configuration);
    if let Err(err) = verify(&operations) {
        logger.log(format!("Verification failed: {}", err));
        process::exit(1);
    }

    let measurements = operations
        .iter()
        .map(|operation| measure(operation, &configuration, &logger))
        .collect();

    let report = Report {
        alphabet: configuration.alphabet_name(),
        measurements,
    };
    match serde_json::to_string_pretty(&report) {
        Ok(report) => println!("{}", report),
        Err(err) => {
            logger.log(format!("Could not serialize report: {}", err));
            process::exit(1);
        }
    }
    logger.log("Done");
}
