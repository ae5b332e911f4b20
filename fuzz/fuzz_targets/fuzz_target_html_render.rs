#![no_main]
use libfuzzer_sys::fuzz_target;
use passdeck::vault::PasswordEntry;
use passdeck::view::{render, RevealState};

fuzz_target!(|fields: (String, String, String, bool)| {
    let (website, username, password, revealed) = fields;
    let entries = vec![PasswordEntry::new(website, username, password)];
    let mut reveal = RevealState::new(1);
    if revealed {
        reveal.toggle(0);
    }
    let html = render(&entries, &reveal).to_html();
    // Escaped user text never opens a row of its own
    assert_eq!(html.matches("<tr>").count(), 2);
});
