//! Verdict rendering: the human-readable validation report and a JSON form.

use crate::compare::{Thresholds, Verdict};
use crate::result::CotejarResult;

/// Render the validation report as text
///
/// Computed metrics are shown to four decimal places; the thresholds and
/// both pass/fail outcomes are always included, followed by the final
/// verdict line.
#[must_use]
pub fn render_text(verdict: &Verdict, thresholds: &Thresholds) -> String {
    let mut out = String::new();
    out.push_str("--- IMAGE VALIDATION REPORT ---\n\n");

    out.push_str("1. Condition: Maximum Pixel Difference (MPD)\n");
    out.push_str(&format!("   - Threshold:  < {}\n", thresholds.max_pixel_diff));
    out.push_str(&format!("   - Computed:   {:.4}\n", verdict.mpd));
    out.push_str(&format!("   - Result:     {}\n\n", pass_fail(verdict.mpd_ok)));

    out.push_str("2. Condition: Root Mean Square Error (RMSE)\n");
    out.push_str(&format!("   - Threshold:  < {}\n", thresholds.rmse));
    out.push_str(&format!("   - Computed:   {:.4}\n", verdict.rmse));
    out.push_str(&format!("   - Result:     {}\n\n", pass_fail(verdict.rmse_ok)));

    out.push_str("-------------------------------------------\n");
    out.push_str(&format!(
        "FINAL VERDICT: {}\n",
        if verdict.is_acceptable {
            "ACCEPTABLE"
        } else {
            "NOT ACCEPTABLE"
        }
    ));
    out.push_str("-------------------------------------------");
    out
}

/// Render the verdict and the thresholds it was evaluated against as JSON
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_json(verdict: &Verdict, thresholds: &Thresholds) -> CotejarResult<String> {
    let value = serde_json::json!({
        "mpd": verdict.mpd,
        "rmse": verdict.rmse,
        "mpd_ok": verdict.mpd_ok,
        "rmse_ok": verdict.rmse_ok,
        "is_acceptable": verdict.is_acceptable,
        "thresholds": thresholds,
    });
    Ok(serde_json::to_string_pretty(&value)?)
}

fn pass_fail(ok: bool) -> &'static str {
    if ok {
        "PASS"
    } else {
        "FAIL"
    }
}
