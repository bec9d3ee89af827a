use anyhow::Error;

pub const EXIT_FAILURE: u8 = 1;

pub fn report_error(err: &Error) {
    eprintln!("{}", render_error(err));
}

fn render_error(err: &Error) -> String {
    format!("error: {:#}", err)
}
