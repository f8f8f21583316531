// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use log::trace;

use crate::{
    interfaces,
    phonedata::types::{CallingCodeInfo, PhoneRule},
};

/// Walks rule sets and rules in stored order and takes the first rule
/// whose length limit and numeric range accept the number.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstMatchRuleMatcher;

impl interfaces::RuleMatcherApi for FirstMatchRuleMatcher {
    fn find_rule<'a>(&self, info: &'a CallingCodeInfo, local_number: &str) -> Option<&'a PhoneRule> {
        let len = local_number.len();
        // Too long for u64 or empty: no range can accept it.
        let value = local_number.parse::<u64>().ok();

        for (set_index, rule_set) in info.rule_sets.iter().enumerate() {
            if !rule_set.applies_to_len(len) {
                continue;
            }
            let Some(value) = value else {
                continue;
            };
            if let Some((rule_index, rule)) = rule_set
                .rules
                .iter()
                .enumerate()
                .find(|(_, rule)| rule.accepts(len, value))
            {
                trace!(
                    "+{} {}: rule set {} rule {} matched",
                    info.calling_code, local_number, set_index, rule_index
                );
                return Some(rule);
            }
        }
        trace!("+{} {}: no rule matched", info.calling_code, local_number);
        None
    }
}
