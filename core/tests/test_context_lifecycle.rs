// Telemetry counters are process-wide, so this binary holds a single test to
// keep the deltas exact.
#[cfg(test)]
mod tests {
    use std::thread;

    use zdict_core::compression::{CompressionService, DecompressionService};
    use zdict_core::telemetry::{snapshot, ContextSnapshot};

    fn exercise(rounds: usize) {
        for i in 0..rounds {
            let input = vec![i as u8; 256];
            let frame = CompressionService::compress(&input, 3).unwrap();
            let out = DecompressionService::decompress(&frame).unwrap();
            assert_eq!(out, input);
        }
    }

    #[test]
    fn one_context_per_thread_released_on_exit() {
        let before: ContextSnapshot = snapshot();

        // A single worker reuses its contexts across calls.
        let during = thread::spawn(|| {
            exercise(5);
            snapshot()
        })
        .join()
        .expect("worker panicked");

        assert_eq!(during.compression.contexts_created - before.compression.contexts_created, 1);
        assert_eq!(during.decompression.contexts_created - before.decompression.contexts_created, 1);
        assert_eq!(during.compression.contexts_live(), before.compression.contexts_live() + 1);
        assert_eq!(during.compression.calls - before.compression.calls, 5);
        assert_eq!(during.decompression.calls - before.decompression.calls, 5);
        assert_eq!(during.compression.bytes_in - before.compression.bytes_in, 5 * 256);

        let after_one = snapshot();
        assert_eq!(after_one.compression.contexts_live(), before.compression.contexts_live());
        assert_eq!(after_one.decompression.contexts_live(), before.decompression.contexts_live());

        // N concurrent workers -> N contexts of each kind.
        let workers = 4;
        thread::scope(|s| {
            let handles: Vec<_> = (0..workers).map(|_| s.spawn(|| exercise(3))).collect();
            for handle in handles {
                handle.join().expect("worker panicked");
            }
        });

        let after_all = snapshot();
        assert_eq!(
            after_all.compression.contexts_created - after_one.compression.contexts_created,
            workers as u64
        );
        assert_eq!(
            after_all.decompression.contexts_created - after_one.decompression.contexts_created,
            workers as u64
        );
        assert_eq!(after_all.compression.contexts_live(), before.compression.contexts_live());
        assert_eq!(after_all.decompression.contexts_live(), before.decompression.contexts_live());
    }
}
