use std::fs;
use std::path::PathBuf;

use kogei::DEFAULT_AVATAR_SIZE;

use crate::AppError;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "avatar", about = "Render the placeholder avatar of an artisan")]
pub struct Avatar {
    #[clap(help = "Display name of the artisan")]
    name: String,
    #[clap(short, long, default_value_t = DEFAULT_AVATAR_SIZE, help = "Width and height in pixels")]
    size: u32,
    #[clap(short, long, help = "Write the output to this file instead of stdout")]
    output: Option<PathBuf>,
    #[clap(long, action = clap::ArgAction::SetTrue, help = "Output the cell pattern as JSON instead of SVG")]
    pattern: bool,
}

impl Avatar {
    pub fn run(&self) -> Result<(), AppError> {
        let avatar = kogei::Avatar::new(&self.name);

        let contents = if self.pattern {
            serde_json::to_string_pretty(&avatar.pattern)
                .map_err(|e| AppError::AvatarWriteError(e.to_string()))?
        } else {
            avatar.render(self.size)?
        };

        match &self.output {
            Some(path) => {
                fs::write(path, contents).map_err(|e| {
                    AppError::AvatarWriteError(format!(
                        "{}: {}",
                        path.display(),
                        e
                    ))
                })?;
                println!("Avatar written to {}", path.display());
            }
            None => println!("{}", contents),
        }

        Ok(())
    }
}
