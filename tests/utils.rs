use termprompt::{
    output::{Captured, Console, OutputConfig},
    Prompter,
};

/// Runs `ask` against scripted `input` and returns its result together with
/// everything the prompter printed.
pub fn scripted<T>(
    input: &str,
    ask: impl FnOnce(&mut Prompter<&[u8], &mut Captured>) -> T,
) -> (T, Captured) {
    scripted_with(input, OutputConfig::default(), ask)
}

pub fn scripted_with<T>(
    input: &str,
    config: OutputConfig,
    ask: impl FnOnce(&mut Prompter<&[u8], &mut Captured>) -> T,
) -> (T, Captured) {
    let mut out = Captured::default();
    let result = {
        let mut prompter = Prompter::new(input.as_bytes(), Console::new(&mut out, config));
        ask(&mut prompter)
    };
    (result, out)
}
