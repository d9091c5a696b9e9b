use objsens::prelude::ObjsensResult;
use objsens::{cli, specialize};

fn main() -> ObjsensResult<()> {
    let args = cli::specialize().get_matches();
    specialize::run(&args)
}
