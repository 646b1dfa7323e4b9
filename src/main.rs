fn main() {
    jira_config::app::cli::run();
}
