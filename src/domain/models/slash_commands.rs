#[cfg(test)]
#[path = "slash_commands_test.rs"]
mod tests;

use super::Intent;

pub struct SlashCommand {
    command: String,
    pub args: Vec<String>,
}

impl SlashCommand {
    pub fn parse(text: &str) -> Option<SlashCommand> {
        let mut args = text
            .trim()
            .split(' ')
            .map(|e| return e.to_string())
            .collect::<Vec<String>>();
        let prefix = args[0].to_string();
        args.remove(0);

        let cmd = SlashCommand {
            command: prefix,
            args,
        };
        if cmd.intent().is_some()
            || cmd.is_quit()
            || cmd.is_help()
            || cmd.is_restart()
            || cmd.is_locale_set()
        {
            return Some(cmd);
        }

        return None;
    }

    /// Intent-selection commands, one per feature.
    pub fn intent(&self) -> Option<Intent> {
        if ["/plan", "/p"].contains(&self.command.as_str()) {
            return Some(Intent::Itinerary);
        }
        if ["/souvenirs", "/s"].contains(&self.command.as_str()) {
            return Some(Intent::Souvenir);
        }
        if ["/places", "/v"].contains(&self.command.as_str()) {
            return Some(Intent::Location);
        }
        if ["/phrases", "/t"].contains(&self.command.as_str()) {
            return Some(Intent::Language);
        }

        return None;
    }

    pub fn is_quit(&self) -> bool {
        return ["/q", "/quit", "/exit"].contains(&self.command.as_str());
    }

    pub fn is_help(&self) -> bool {
        return ["/h", "/help"].contains(&self.command.as_str());
    }

    pub fn is_restart(&self) -> bool {
        return ["/restart", "/startover"].contains(&self.command.as_str());
    }

    pub fn is_locale_set(&self) -> bool {
        return ["/locale", "/lang"].contains(&self.command.as_str());
    }
}
