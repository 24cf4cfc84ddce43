use alphametic_race::puzzle::Puzzle;
use alphametic_race::sampling::{SampleReport, SamplerConfig, sample};
use alphametic_race::search::{
    LeadingZeroPolicy, ParallelConfig, SearchConfig, evaluate, is_satisfied, race,
};
use std::time::Duration;

#[test]
fn test_race_solves_original_puzzle() {
    let puzzle = Puzzle::default();
    let parallel_config = ParallelConfig::default().with_contestants(2);

    let outcome = race(&puzzle, &SearchConfig::default(), &parallel_config)
        .expect("race should produce a winner");

    let mapping = &outcome.solution.mapping;
    assert!(mapping.is_valid_for(&puzzle));
    assert_ne!(mapping.digit('c'), Some(0), "target must not start with zero");

    // ALAS + LASS + NO + MORE == CASH under the winning substitution
    let value = |word: &str| mapping.numeral(word).unwrap().parse::<u128>().unwrap();
    assert_eq!(
        value("alas") + value("lass") + value("no") + value("more"),
        value("cash")
    );

    let evaluation = evaluate(&puzzle, mapping, LeadingZeroPolicy::Skip);
    assert!(evaluation.is_satisfied());
    assert_eq!(evaluation.leading_zero_addends, 0);
}

#[test]
fn test_sampling_five_races_of_three() {
    let puzzle: Puzzle = "to + go = out".parse().unwrap();
    let config = SamplerConfig::default()
        .with_samples(5)
        .with_parallel(ParallelConfig::default().with_contestants(3));

    let samples = sample(&puzzle, &config).expect("sampling should succeed");

    assert_eq!(samples.len(), 5);
    for s in &samples {
        assert!(s.run_time >= Duration::ZERO);
        assert!(is_satisfied(
            &puzzle,
            &s.solution.mapping,
            LeadingZeroPolicy::Skip
        ));
    }

    let report = SampleReport::from_samples(&puzzle, 3, &samples);
    let fastest = report.fastest.as_ref().unwrap().run_time;
    let slowest = report.slowest.as_ref().unwrap().run_time;
    for s in &samples {
        assert!(fastest <= s.run_time && s.run_time <= slowest);
    }
    assert!(report.median.unwrap() >= fastest && report.median.unwrap() <= slowest);
}

#[test]
fn test_reject_policy_solutions_have_no_leading_zero_addends() {
    let puzzle: Puzzle = "ab + ba = cc".parse().unwrap();
    let search_config = SearchConfig::default().with_leading_zero(LeadingZeroPolicy::Reject);
    let parallel_config = ParallelConfig::default().with_contestants(2).with_seed(11);

    let outcome = race(&puzzle, &search_config, &parallel_config).unwrap();
    let evaluation = evaluate(&puzzle, &outcome.solution.mapping, LeadingZeroPolicy::Reject);
    assert!(evaluation.is_satisfied());
    assert_eq!(evaluation.leading_zero_addends, 0);
}

#[test]
fn test_fixed_seed_single_contestant_is_reproducible() {
    let puzzle: Puzzle = "a + b = c".parse().unwrap();
    let parallel_config = ParallelConfig::default().with_contestants(1).with_seed(2024);

    let first = race(&puzzle, &SearchConfig::default(), &parallel_config).unwrap();
    let second = race(&puzzle, &SearchConfig::default(), &parallel_config).unwrap();
    assert_eq!(first.solution, second.solution);
}
