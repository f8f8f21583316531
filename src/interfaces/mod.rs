use crate::phonedata::types::{CallingCodeInfo, PhoneRule};

/// Internal rule matching API used to isolate the underlying
/// implementation of the matcher and allow different implementations to be
/// swapped in easily.
pub(crate) trait RuleMatcherApi: Send + Sync {
  /// Returns the rule that formats the given local number (a string containing
  /// only decimal digits, calling code already removed), if any applies.
  fn find_rule<'a>(&self, info: &'a CallingCodeInfo, local_number: &str) -> Option<&'a PhoneRule>;
}
