#![no_main]
use libfuzzer_sys::fuzz_target;
use passdeck::vault::codec::JsonCodec;
use passdeck::vault::ports::ListCodec;

fuzz_target!(|data: &str| {
    // Decoder must not panic on arbitrary inputs
    let _ = JsonCodec.decode(data);
});
