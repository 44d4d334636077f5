use std::time::Instant;

use indicatif::ProgressBar;
use ominoes::{Enumerator, OminoSet};

use crate::{finish_bar, make_bar, EnumerateOpts};

/// `set` drawn in full if it is small enough, otherwise just its size.
fn report(set: &OminoSet, display_up_to: usize) -> String {
    if set.omino_size() <= display_up_to {
        set.to_string()
    } else {
        format!("{} ominoes of size {}", set.count(), set.omino_size())
    }
}

pub fn enumerate(opts: &EnumerateOpts) {
    let n = opts.n;
    let start = Instant::now();

    let mut enumerator = Enumerator::new();
    println!("{}", report(enumerator.current(), opts.display_up_to));

    while enumerator.omino_size() < n {
        let next_size = enumerator.omino_size() + 1;
        let parents = enumerator.current().count() as u64;

        let bar = if opts.no_progress {
            ProgressBar::hidden()
        } else {
            make_bar(parents)
        };
        bar.set_message(format!("Expanding ominoes of N = {}...", next_size - 1));

        let step_start = Instant::now();
        let next = match enumerator.step_with_progress(&bar) {
            Ok(next) => next,
            Err(e) => {
                bar.abandon();
                tracing::error!(size = next_size, "enumeration failed: {e}");
                std::process::exit(1);
            }
        };

        finish_bar(&bar, step_start.elapsed(), next.count(), next_size);
        println!("{}", report(next, opts.display_up_to));
    }

    let duration = start.elapsed();
    let found = enumerator.into_current();

    println!("Unique ominoes found for N = {n}: {}.", found.count());
    println!("Duration: {} ms", duration.as_millis());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_sets_are_drawn() {
        let dominoes = OminoSet::monominoes().grow().unwrap();
        let out = report(&dominoes, 2);

        assert_eq!(out, dominoes.to_string());
        assert!(out.contains('#'));
    }

    #[test]
    fn large_sets_are_counted() {
        let mut enumerator = Enumerator::new();
        let tetrominoes = enumerator.run_to(4).unwrap();

        assert_eq!(report(tetrominoes, 3), "5 ominoes of size 4");
        assert_eq!(report(tetrominoes, 0), "5 ominoes of size 4");
    }
}
