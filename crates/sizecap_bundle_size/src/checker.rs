use log::{debug, info, trace};

use sizecap_core::{Bundle, human_bytes, is_reserved_suffix};

use crate::{
    config::SizeCheckConfig,
    error::SizeExceededError,
    reporter::Reporter,
    types::{CheckResult, Violation},
};

/// Audit every file in `bundle` against the configured byte budget.
///
/// Files are visited in the bundle's own order. Source maps and type
/// declarations are never measured and produce no verdict. In throw mode,
/// violations accumulate and fail the pass as one combined error once every
/// file has been seen, so all offenders are visible in a single failure. In
/// warn mode each violation is reported immediately and the pass always
/// succeeds.
///
/// The pass holds no state between invocations; identical inputs produce
/// identical verdicts and an identical outcome.
pub fn run_size_check<R: Reporter>(
    config: &SizeCheckConfig,
    bundle: &Bundle,
    reporter: &mut R,
) -> Result<CheckResult, SizeExceededError> {
    info!("Checking bundle sizes against a {} byte budget", config.max_size);

    let max_formatted = human_bytes(config.max_size);
    let mut violations = Vec::new();
    let mut files_checked = 0usize;

    for (file_name, output) in bundle.iter() {
        if is_reserved_suffix(file_name) {
            trace!("Skipping reserved output file: {}", file_name);
            continue;
        }

        let size = output.measured_size();
        files_checked += 1;
        trace!("Measured {}: {} bytes", file_name, size);

        if size > config.max_size {
            let violation =
                Violation { file_name: file_name.to_string(), size, max_size: config.max_size };

            if config.throw_error {
                debug!("Collecting violation for {}", file_name);
                violations.push(violation);
            } else {
                reporter.warning(&violation.message());
                violations.push(violation);
            }
        } else {
            reporter.success(&format!(
                "✓ {}: {} / {}",
                file_name,
                human_bytes(size),
                max_formatted
            ));
        }
    }

    if config.throw_error && !violations.is_empty() {
        info!("Size check failed with {} violations", violations.len());
        return Err(SizeExceededError::new(violations));
    }

    info!("Size check complete. {} files checked", files_checked);
    Ok(CheckResult { violations, files_checked })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::CollectingReporter;
    use sizecap_core::Output;

    fn throwing(max_size: u64) -> SizeCheckConfig {
        SizeCheckConfig { max_size, throw_error: true }
    }

    fn warning(max_size: u64) -> SizeCheckConfig {
        SizeCheckConfig { max_size, throw_error: false }
    }

    fn chunk_of_len(len: usize) -> Output {
        Output::chunk("x".repeat(len))
    }

    #[test]
    fn test_oversized_chunk_fails_in_throw_mode() {
        let mut bundle = Bundle::new();
        bundle.insert("main.js", chunk_of_len(2000));

        let mut reporter = CollectingReporter::default();
        let err = run_size_check(&throwing(1000), &bundle, &mut reporter).unwrap_err();

        let message = err.to_string();
        assert!(message.contains("Bundle size exceeded"));
        assert!(message.contains("main.js"));
        assert!(message.contains("1.95KB"));
        assert!(message.contains("max: 1000B"));
        // Nothing is emitted for the offender until the combined failure
        assert!(reporter.warnings.is_empty());
        assert!(reporter.successes.is_empty());
    }

    #[test]
    fn test_oversized_chunk_warns_in_warn_mode() {
        let mut bundle = Bundle::new();
        bundle.insert("main.js", chunk_of_len(2000));

        let mut reporter = CollectingReporter::default();
        let result = run_size_check(&warning(1000), &bundle, &mut reporter).unwrap();

        assert_eq!(reporter.warnings.len(), 1);
        assert!(reporter.warnings[0].contains("main.js"));
        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.files_checked, 1);
    }

    #[test]
    fn test_file_at_threshold_passes() {
        let mut bundle = Bundle::new();
        bundle.insert("main.js", chunk_of_len(1000));

        let mut reporter = CollectingReporter::default();
        let result = run_size_check(&throwing(1000), &bundle, &mut reporter).unwrap();

        assert_eq!(reporter.successes, vec!["✓ main.js: 1000B / 1000B"]);
        assert_eq!(result.files_checked, 1);
    }

    #[test]
    fn test_reserved_suffixes_are_not_measured() {
        let mut bundle = Bundle::new();
        bundle.insert("main.js.map", chunk_of_len(4000));
        bundle.insert("index.d.ts", Output::asset_text("x".repeat(4000)));
        bundle.insert("main.js", chunk_of_len(500));

        let mut reporter = CollectingReporter::default();
        let result = run_size_check(&throwing(1000), &bundle, &mut reporter).unwrap();

        // Only main.js produces a verdict; the companions never appear
        assert_eq!(result.files_checked, 1);
        assert_eq!(reporter.successes.len(), 1);
        assert!(reporter.successes[0].contains("main.js:"));
        assert!(reporter.warnings.is_empty());
    }

    #[test]
    fn test_binary_assets_measure_zero_and_pass() {
        let mut bundle = Bundle::new();
        bundle.insert("logo.png", Output::asset_binary(vec![0u8; 50_000]));

        let mut reporter = CollectingReporter::default();
        let result = run_size_check(&throwing(1000), &bundle, &mut reporter).unwrap();

        assert_eq!(reporter.successes, vec!["✓ logo.png: 0B / 1000B"]);
        assert_eq!(result.files_checked, 1);
    }

    #[test]
    fn test_all_violations_aggregate_into_one_failure() {
        let mut bundle = Bundle::new();
        bundle.insert("a.js", chunk_of_len(2000));
        bundle.insert("ok.js", chunk_of_len(100));
        bundle.insert("b.js", chunk_of_len(3000));

        let mut reporter = CollectingReporter::default();
        let err = run_size_check(&throwing(1000), &bundle, &mut reporter).unwrap_err();

        // The pass keeps scanning past the first offender
        assert_eq!(err.violations().len(), 2);
        assert_eq!(err.to_string().lines().count(), 2);
        assert_eq!(reporter.successes.len(), 1);
        assert!(reporter.successes[0].contains("ok.js"));
    }

    #[test]
    fn test_verdicts_follow_bundle_order() {
        let mut bundle = Bundle::new();
        bundle.insert("first.js", chunk_of_len(10));
        bundle.insert("second.js", chunk_of_len(20));
        bundle.insert("third.css", Output::asset_text("body {}"));

        let mut reporter = CollectingReporter::default();
        run_size_check(&throwing(1000), &bundle, &mut reporter).unwrap();

        assert!(reporter.successes[0].contains("first.js"));
        assert!(reporter.successes[1].contains("second.js"));
        assert!(reporter.successes[2].contains("third.css"));
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let mut bundle = Bundle::new();
        bundle.insert("main.js", chunk_of_len(2000));
        bundle.insert("ok.js", chunk_of_len(100));
        let config = throwing(1000);

        let mut first = CollectingReporter::default();
        let mut second = CollectingReporter::default();
        let a = run_size_check(&config, &bundle, &mut first).unwrap_err();
        let b = run_size_check(&config, &bundle, &mut second).unwrap_err();

        assert_eq!(a.to_string(), b.to_string());
        assert_eq!(first.successes, second.successes);
    }

    #[test]
    fn test_empty_bundle_passes() {
        let bundle = Bundle::new();
        let mut reporter = CollectingReporter::default();
        let result = run_size_check(&throwing(1000), &bundle, &mut reporter).unwrap();

        assert_eq!(result.files_checked, 0);
        assert!(result.violations.is_empty());
    }
}
