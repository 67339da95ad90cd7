//! Install command for setting up conbuddy system-wide

use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::data_paths::DataPaths;

#[derive(Args, Clone)]
pub struct InstallArgs {
    /// Overwrite existing installation without prompting
    #[arg(long)]
    pub overwrite: bool,

    /// Custom installation directory (defaults to ~/.local/bin)
    #[arg(long)]
    pub bin_dir: Option<String>,
}

pub struct InstallCommand {
    args: InstallArgs,
}

impl InstallCommand {
    pub fn new(args: InstallArgs) -> Self {
        Self { args }
    }

    pub async fn execute(&self, data_paths: DataPaths) -> Result<()> {
        println!("{}", "🔧 Consignment Buddy Installation".bright_blue().bold());
        println!("═══════════════════════════════════════");

        let install_dir = self.get_install_directory()?;
        let target_path = install_dir.join("conbuddy");

        if !install_dir.exists() {
            println!("📁 Creating installation directory: {}", install_dir.display());
            fs::create_dir_all(&install_dir)?;
        }

        if target_path.exists() && !self.args.overwrite {
            println!(
                "⚠️  {} already exists",
                target_path.display().to_string().yellow()
            );

            if !self.prompt_overwrite()? {
                println!("{}", "❌ Installation cancelled by user".red());
                return Ok(());
            }
        }

        let current_exe = env::current_exe()?;
        println!("📋 Source: {}", current_exe.display());
        println!("📋 Target: {}", target_path.display());

        println!("📦 Copying executable...");
        fs::copy(&current_exe, &target_path)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&target_path)?.permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&target_path, perms)?;
            println!("🔐 Set executable permissions");
        }

        println!("📁 Setting up data directories...");
        data_paths.ensure_directories()?;

        self.check_path_setup(&install_dir)?;

        println!(
            "{}",
            "✅ Installation completed successfully!".bright_green().bold()
        );
        println!();
        println!("{}", "🚀 Getting Started:".bright_cyan().bold());
        println!("   1. Restart your terminal or run: source ~/.bashrc");
        println!("   2. Verify installation: conbuddy version");
        println!("   3. Launch the calculator: conbuddy tui");
        println!();

        Ok(())
    }

    fn get_install_directory(&self) -> Result<PathBuf> {
        if let Some(custom_dir) = &self.args.bin_dir {
            return Ok(PathBuf::from(custom_dir));
        }

        // ~/.local/bin preferred, /usr/local/bin as fallback
        if let Some(home) = dirs::home_dir() {
            return Ok(home.join(".local").join("bin"));
        }

        Ok(PathBuf::from("/usr/local/bin"))
    }

    fn prompt_overwrite(&self) -> Result<bool> {
        use std::io::{self, Write};

        print!("Do you want to overwrite the existing installation? [y/N]: ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let response = input.trim().to_lowercase();
        Ok(response == "y" || response == "yes")
    }

    fn check_path_setup(&self, install_dir: &Path) -> Result<()> {
        let install_dir_str = install_dir.to_string_lossy();

        if let Ok(path_var) = env::var("PATH") {
            if path_var.split(':').any(|p| p == install_dir_str) {
                println!("✅ {} is already in your PATH", install_dir.display());
                return Ok(());
            }
        }

        println!("⚠️  {} is not in your PATH", install_dir.display());
        println!("   Add this line to your shell profile:");
        println!("   export PATH=\"{}:$PATH\"", install_dir_str);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_bin_dir_wins() {
        let dir = tempfile::tempdir().unwrap();
        let command = InstallCommand::new(InstallArgs {
            overwrite: true,
            bin_dir: Some(dir.path().to_string_lossy().to_string()),
        });
        assert_eq!(command.get_install_directory().unwrap(), dir.path());
    }
}
