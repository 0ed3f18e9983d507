//! Module-10 and module-11 check digits
//!
//! Both algorithms walk the window from the least significant digit. Windows
//! are plain digit slices, most significant first.

use crate::types::{CheckResult, CheckTarget, CodeForm, FieldSet};
use crate::decoder::bar_from_fields;
use crate::normalizer::digit_values;

/// Module-11 weights, applied cyclically from the rightmost digit
const MODULE11_WEIGHTS: [u32; 8] = [2, 3, 4, 5, 6, 7, 8, 9];

/// Position of the overall check digit in the bar form (0-indexed)
const BAR_CHECK_DIGIT_POS: usize = 4;

/// Module-10 check digit
///
/// Weights alternate 2, 1 starting at the rightmost digit; products of two
/// digits are reduced to the sum of their digits.
pub fn module10(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .rev()
        .zip([2u32, 1].iter().cycle())
        .map(|(&d, &w)| {
            let product = u32::from(d) * w;
            if product >= 10 {
                product - 9
            } else {
                product
            }
        })
        .sum();

    ((10 - sum % 10) % 10) as u8
}

/// Module-11 check digit
///
/// A result of 0, 1, 10 or 11 is replaced by 1.
pub fn module11(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .rev()
        .zip(MODULE11_WEIGHTS.iter().cycle())
        .map(|(&d, &w)| u32::from(d) * w)
        .sum();

    match 11 - sum % 11 {
        0 | 1 | 10 | 11 => 1,
        dv => dv as u8,
    }
}

/// Window covered by the overall check digit: the bar code without position 5
pub fn general_window(fields: &FieldSet) -> Vec<u8> {
    let mut window = digit_values(&bar_from_fields(fields));
    window.remove(BAR_CHECK_DIGIT_POS);
    window
}

/// Window covered by a block check digit
pub fn block_window(fields: &FieldSet, index: usize) -> Vec<u8> {
    let info = digit_values(&fields.blocks[index].info);
    if index == 0 {
        let mut window = digit_values(&fields.bank_code);
        window.push(fields.currency_code);
        window.extend(info);
        window
    } else {
        info
    }
}

/// Recompute every check digit the form carries
///
/// Bar codes only embed the overall digit; their block digits are derived at
/// segmentation and never checked.
pub fn verify(fields: &FieldSet, form: CodeForm) -> Vec<CheckResult> {
    let mut results = Vec::with_capacity(4);

    if form == CodeForm::Line {
        let targets = [CheckTarget::Block1, CheckTarget::Block2, CheckTarget::Block3];
        for (index, target) in targets.into_iter().enumerate() {
            results.push(CheckResult {
                target,
                embedded: fields.blocks[index].check_digit,
                computed: module10(&block_window(fields, index)),
            });
        }
    }

    results.push(CheckResult {
        target: CheckTarget::General,
        embedded: fields.check_digit,
        computed: module11(&general_window(fields)),
    });

    results
}
