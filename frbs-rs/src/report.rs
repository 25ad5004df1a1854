//! Textual dumps of the data base and rule base.
//!
//! String output only; the surrounding driver owns files and paths. The
//! formats are stable — acceptance reports compare them line by line.

use frbs_core::{Result, RuleBase};

/// Dump of the data base: every input partition plus the output partition.
///
/// ```text
/// DATA BASE:
///
/// Input Variable 0: { L0:(...) L1:(...) }
/// Input Variable 1: { L0:(...) L1:(...) }
///
/// Output Variable: { S0 S1 }
/// ```
pub fn data_base_dump(base: &RuleBase) -> String {
    let mut out = String::from("DATA BASE:\n");
    for var in 0..base.num_inputs() {
        out.push_str(&format!(
            "\nInput Variable {var}: {}",
            base.input_partition(var)
        ));
    }
    out.push_str(&format!("\n\nOutput Variable: {}", base.output_partition()));
    out.push('\n');
    out
}

/// Dump of the rule base, one line per rule, 1-indexed in discovery order:
///
/// ```text
/// RULE BASE:
///
/// Rule_1: IF X0 IS L0 AND X1 IS L1 THEN S0
/// ```
pub fn rule_base_dump(base: &RuleBase) -> Result<String> {
    let mut out = String::from("RULE BASE:\n");
    for (n, (code, rule)) in base.rules().enumerate() {
        out.push_str(&format!(
            "\nRule_{}: IF {} THEN S{}",
            n + 1,
            base.describe_antecedent(code)?,
            rule.consequent
        ));
    }
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use frbs_core::{FuzzyPartition, FuzzyRule, TConorm, TNorm};

    fn base_with_rules() -> RuleBase {
        let mut base = RuleBase::new(
            vec![
                FuzzyPartition::triangular(0.0, 1.0, 2).unwrap(),
                FuzzyPartition::triangular(0.0, 1.0, 2).unwrap(),
            ],
            FuzzyPartition::crisp(2).unwrap(),
            TNorm::Product,
            TConorm::Sum,
        )
        .unwrap();
        base.add_rules(&[0, 3], &[FuzzyRule::new(0, 1.0), FuzzyRule::new(1, 1.0)]);
        base
    }

    #[test]
    fn test_data_base_dump_format() {
        let dump = data_base_dump(&base_with_rules());
        assert_eq!(
            dump,
            "DATA BASE:\n\
             \nInput Variable 0: { L0:(0.0000,0.0000,1.0000) L1:(0.0000,1.0000,1.0000) }\
             \nInput Variable 1: { L0:(0.0000,0.0000,1.0000) L1:(0.0000,1.0000,1.0000) }\
             \n\nOutput Variable: { S0 S1 }\n"
        );
    }

    #[test]
    fn test_rule_base_dump_format() {
        let dump = rule_base_dump(&base_with_rules()).unwrap();
        assert_eq!(
            dump,
            "RULE BASE:\n\
             \nRule_1: IF X0 IS L0 AND X1 IS L0 THEN S0\
             \nRule_2: IF X0 IS L1 AND X1 IS L1 THEN S1\n"
        );
    }
}
