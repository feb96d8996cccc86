use primepool::runner;

#[test]
fn single_chunk_scenario() {
    assert_eq!(runner::run(10, 10, 2).unwrap(), [2, 3, 5, 7]);
}

#[test]
fn three_chunk_scenario() {
    assert_eq!(
        runner::run(30, 10, 3).unwrap(),
        [2, 3, 5, 7, 11, 13, 17, 19, 23, 29]
    );
}

#[test]
fn limit_below_two_yields_nothing() {
    assert!(runner::run(1, 10, 2).unwrap().is_empty());
}

#[test]
fn chunk_larger_than_the_range_still_works() {
    assert_eq!(runner::run(10, 1_000, 4).unwrap(), [2, 3, 5, 7]);
}

#[test]
fn worker_count_does_not_change_the_result() {
    let expected = runner::run_serial(50_000);
    for threads in [1, 2, 6, 16] {
        assert_eq!(runner::run(50_000, 4_096, threads).unwrap(), expected);
    }
}
