use subcon::{extract_command, extract_command_str, invocation_from_args};

const PROGRAM_TOKENS: &[&str] = &[
    "subcon",
    "subcon.exe",
    "C:\\tools\\subcon.exe",
    "\"C:\\Program Files\\subcon\\subcon.exe\"",
    "\"my\\\"prog\"",
    "\"my\\\" prog\"",
    "my\\ prog",
    "\"\"",
    "a\"b c\"d",
];

const REMAINDERS: &[&str] = &[
    "x",
    "cmd.exe /c echo hi",
    "\"quoted arg\" plain",
    "\\\\server\\share\\ dir",
    "\\\"",
    "\"",
    "a  b   c   ",
    "echo \"unterminated",
    "trailing\\",
];

#[test]
fn command_after_any_program_token_is_returned_verbatim() {
    for program in PROGRAM_TOKENS {
        for separators in 1..=4 {
            for remainder in REMAINDERS {
                let invocation = format!("{program}{}{remainder}", " ".repeat(separators));

                assert_eq!(
                    Some(*remainder),
                    extract_command_str(&invocation),
                    "invocation {invocation:?}"
                );

                let wide: Vec<u16> = invocation.encode_utf16().collect();
                let expected: Vec<u16> = remainder.encode_utf16().collect();
                assert_eq!(Some(expected.as_slice()), extract_command(&wide));
            }
        }
    }
}

#[test]
fn any_program_token_followed_by_spaces_has_no_command() {
    for program in PROGRAM_TOKENS {
        for separators in 0..=4 {
            let invocation = format!("{program}{}", " ".repeat(separators));

            assert_eq!(
                None,
                extract_command_str(&invocation),
                "invocation {invocation:?}"
            );
        }
    }
}

#[test]
fn program_name_alone_has_no_command() {
    assert_eq!(None, extract_command_str(""));
    assert_eq!(None, extract_command_str("subcon.exe"));
    assert_eq!(None, extract_command_str("\"C:\\Program Files\\subcon.exe\""));
}

#[test]
fn trailing_spaces_are_not_a_command() {
    assert_eq!(None, extract_command_str("subcon.exe "));
    assert_eq!(None, extract_command_str("subcon.exe     "));
    assert_eq!(None, extract_command_str("\"C:\\tools dir\\subcon.exe\"   "));
}

#[test]
fn command_follows_program_name() {
    assert_eq!(
        Some("cmd.exe /c echo hi"),
        extract_command_str("subcon.exe cmd.exe /c echo hi")
    );
}

#[test]
fn separator_spaces_are_skipped() {
    assert_eq!(Some("git status"), extract_command_str("subcon    git status"));
}

#[test]
fn command_is_returned_verbatim() {
    let command = "\"C:\\Program Files\\Git\\bin\\git.exe\" log --format=\"%h %s\"  C:\\repo\\ ";

    assert_eq!(
        Some(command),
        extract_command_str(&format!("subcon.exe  {command}"))
    );
}

#[test]
fn quoted_program_name_may_contain_spaces() {
    assert_eq!(
        Some("where notepad"),
        extract_command_str("\"C:\\Program Files\\subcon\\subcon.exe\" where notepad")
    );
}

#[test]
fn escaped_quote_does_not_end_quoting() {
    assert_eq!(
        Some("run it"),
        extract_command_str("\"my\\\"prog\" run it")
    );
    assert_eq!(
        Some("x"),
        extract_command_str("\"my\\\" prog\" x")
    );
}

#[test]
fn escaped_space_is_part_of_program_name() {
    assert_eq!(Some("b c"), extract_command_str("my\\ prog b c"));
}

#[test]
fn unterminated_quote_has_no_command() {
    assert_eq!(None, extract_command_str("\"subcon.exe cmd /c dir"));
}

#[test]
fn trailing_backslash_has_no_command() {
    assert_eq!(None, extract_command_str("subcon\\"));
}

#[test]
fn text_ends_at_nul() {
    assert_eq!(None, extract_command_str("subcon\0 cmd"));
    assert_eq!(Some("cmd"), extract_command_str("subcon cmd\0 ignored"));
}

#[test]
fn non_ascii_text_is_preserved() {
    assert_eq!(
        Some("écho «bonjour»"),
        extract_command_str("\"C:\\Überprogramm\\subcon.exe\" écho «bonjour»")
    );
}

#[test]
fn wide_invocation_text() {
    let invocation: Vec<u16> = "\"C:\\my dir\\subcon.exe\"  cmd.exe /c ver\0"
        .encode_utf16()
        .collect();
    let expected: Vec<u16> = "cmd.exe /c ver".encode_utf16().collect();

    assert_eq!(Some(expected.as_slice()), extract_command(&invocation));
}

#[test]
fn rebuilt_invocation_without_arguments_has_no_command() {
    let invocation = invocation_from_args(["/usr/local/bin/subcon"]).unwrap();

    assert_eq!("\"/usr/local/bin/subcon\"", invocation);
    assert_eq!(None, extract_command_str(&invocation));
}

#[test]
fn rebuilt_invocation_splits_back_into_arguments() {
    let args = ["subcon", "echo", "hello world", "it's", "a\\b", "\"quoted\""];
    let invocation = invocation_from_args(args).unwrap();

    let command = extract_command_str(&invocation).unwrap();

    assert_eq!(args[1..].to_vec(), shell_words::split(command).unwrap());
}

#[test]
fn rebuilt_program_name_is_one_word() {
    let invocation = invocation_from_args(["/opt/my \"odd\" dir\\subcon", "run", "it"]).unwrap();

    assert_eq!(Some("run it"), extract_command_str(&invocation));
}

#[cfg(unix)]
#[test]
fn non_utf8_argument_is_rejected() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let args = [
        OsStr::new("subcon"),
        OsStr::new("printf"),
        OsStr::from_bytes(b"\xff"),
    ];

    let err = invocation_from_args(args).expect_err("Should not rebuild a non UTF-8 argument");

    assert_eq!(22, err.exit_status());
}

#[cfg(unix)]
#[test]
fn non_utf8_program_name_is_accepted() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let args = [OsStr::from_bytes(b"/opt/\xff/subcon"), OsStr::new("run")];

    let invocation = invocation_from_args(args).unwrap();

    assert_eq!(Some("run"), extract_command_str(&invocation));
}
