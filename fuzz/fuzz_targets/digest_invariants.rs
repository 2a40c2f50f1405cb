#![no_main]

use digestrs::{Algorithm, Digest};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let split = data.len() / 2;

    for &algorithm in Algorithm::available() {
        if algorithm == Algorithm::Random {
            // Only the shape is checkable.
            let mut digest = Digest::random();
            digest.update(data);
            let first = digest.digest();
            assert_eq!(first.len(), 16);
            assert_eq!(digest.digest(), first);
            continue;
        }

        // One shot vs split into two updates
        let mut whole = Digest::new(algorithm);
        whole.update(data);

        let mut parts = Digest::new(algorithm);
        parts.update(&data[..split]);
        let snapshot = parts.copy();
        parts.update(&data[split..]);

        assert_eq!(whole.digest(), parts.digest());

        // Idempotence and output shape
        assert_eq!(whole.digest(), whole.digest());
        assert_eq!(whole.digest().len(), algorithm.digest_size());
        assert_eq!(whole.hexdigest().len(), 2 * algorithm.digest_size());

        // The copy still digests only the prefix
        let mut prefix = Digest::new(algorithm);
        prefix.update(&data[..split]);
        assert_eq!(snapshot.digest(), prefix.digest());

        // Byte-at-a-time must agree too (inputs are small)
        let mut trickle = Digest::new(algorithm);
        for &byte in data {
            trickle.update([byte]);
        }
        assert_eq!(trickle.digest(), whole.digest());
    }
});
