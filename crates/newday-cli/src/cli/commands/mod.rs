use super::args::Cli;

pub mod list;
pub mod new_day;

pub fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    if cli.list {
        return list::run(&cli);
    }
    new_day::run(&cli)
}
