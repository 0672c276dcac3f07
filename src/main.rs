use anyhow::{bail, Context};
use log::{debug, info};
use outcome::{Failure, Outcome, Success};

/// Which outcome the demo builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Branch {
    Success,
    Failure,
}

impl TryFrom<&str> for Branch {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "true" => Ok(Self::Success),
            "false" => Ok(Self::Failure),
            _ => bail!("invalid branch flag: {}, expected true or false", value),
        }
    }
}

impl From<Branch> for bool {
    fn from(branch: Branch) -> Self {
        branch == Branch::Success
    }
}

fn ok_if(flag: bool) -> Outcome<i32, f64> {
    if flag {
        Success(1).into()
    } else {
        Failure(2.0).into()
    }
}

/// Renders value derived from outcome the same way for both branches.
fn render(branch: Branch) -> String {
    let outcome = ok_if(branch.into());
    debug!("render - built outcome: {:?}", outcome);

    match branch {
        Branch::Success => outcome.match_with(|x| x as f32, |_| 0.0).to_string(),
        Branch::Failure => outcome.match_with(|_| 0u64, |y| y as u64).to_string(),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let branches = match std::env::args().nth(1) {
        Some(arg) => vec![Branch::try_from(arg.as_str()).context("could not parse arguments")?],
        None => vec![Branch::Success, Branch::Failure],
    };

    for branch in branches {
        let rendered = render(branch);
        info!("{:?} branch rendered as {}", branch, rendered);
        print!("{}", rendered);
    }
    println!();

    Ok(())
}
