#[cfg(test)]
mod tests {
    use zdict_core::compression::{CompressionService, DecompressionService};
    use zdict_core::telemetry::{snapshot, ContextSnapshot, KindSnapshot};

    #[test]
    fn ratio_is_zero_without_traffic() {
        assert_eq!(ContextSnapshot::default().compression_ratio(), 0.0);
    }

    #[test]
    fn ratio_reflects_compressed_over_plain() {
        let snap = ContextSnapshot {
            compression: KindSnapshot { bytes_in: 1000, bytes_out: 250, ..Default::default() },
            decompression: KindSnapshot::default(),
        };
        assert!((snap.compression_ratio() - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn counters_grow_with_traffic() {
        let before = snapshot();
        let input = vec![7u8; 4096];
        let frame = CompressionService::compress(&input, 3).unwrap();
        DecompressionService::decompress(&frame).unwrap();
        let after = snapshot();

        assert!(after.compression.calls > before.compression.calls);
        assert!(after.compression.bytes_in >= before.compression.bytes_in + 4096);
        assert!(after.decompression.bytes_out >= before.decompression.bytes_out + 4096);
    }

    #[test]
    fn snapshot_serializes() {
        let json = serde_json::to_value(snapshot()).unwrap();
        assert!(json["compression"]["contexts_created"].is_u64());
        assert!(json["decompression"]["bytes_out"].is_u64());
    }
}
