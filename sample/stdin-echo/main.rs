use std::io::{copy, stdin, stdout};

fn main() {
    copy(&mut stdin().lock(), &mut stdout().lock()).unwrap();
}
