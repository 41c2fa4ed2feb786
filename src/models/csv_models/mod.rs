pub mod firewall_rule;
