use assert_cmd::Command;
use httpmock::prelude::*;

fn tunnels_cli(server: &MockServer) -> Command {
    let mut cmd = Command::cargo_bin("tunnels-cli").unwrap();
    cmd.env("RESTVPN_ADDR", server.base_url())
        .env_remove("RESTVPN_KEY")
        .env("RUST_LOG", "off");
    cmd
}

#[test]
fn add_fills_unset_fields_with_empty_strings() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/restvpn/tunnels")
            .header_missing("x-api-key")
            .body(r#"{"customer":"bob","remote_ip":"10.0.0.5","remote_port":"1194","description":"","mask":"","gateway":""}"#);
        then.status(201).body(r#"{"status": "created"}"#);
    });

    tunnels_cli(&server)
        .args(["add", "-customer", "bob", "-ip", "10.0.0.5", "-port", "1194"])
        .assert()
        .success()
        .stdout(r#"{"status": "created"}"#);
    mock.assert();
}

#[test]
fn every_request_carries_the_key() {
    let server = MockServer::start();
    let list = server.mock(|when, then| {
        when.method(GET)
            .path("/restvpn/tunnels/")
            .header("x-api-key", "abc");
        then.status(200).body("[]");
    });
    let get = server.mock(|when, then| {
        when.method(GET)
            .path("/restvpn/tunnels/bob")
            .header("x-api-key", "abc");
        then.status(200).body("{}");
    });

    tunnels_cli(&server)
        .env("RESTVPN_KEY", "abc")
        .arg("list")
        .assert()
        .success()
        .stdout("[]");
    tunnels_cli(&server)
        .env("RESTVPN_KEY", "abc")
        .args(["get", "-customer", "bob"])
        .assert()
        .success()
        .stdout("{}");

    list.assert();
    get.assert();
}

#[test]
fn update_sends_gateway() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/restvpn/tunnels/bob/10.0.0.5")
            .header("content-type", "application/json")
            .body(r#"{"remote_port":"","description":"","mask":"255.255.255.252","gateway":"10.0.0.1"}"#);
        then.status(200).body("updated");
    });

    tunnels_cli(&server)
        .args([
            "update", "-customer", "bob", "-ip", "10.0.0.5", "-mask", "255.255.255.252", "-gw",
            "10.0.0.1",
        ])
        .assert()
        .success()
        .stdout("updated");
    mock.assert();
}

#[test]
fn delete_without_ip_is_a_usage_error() {
    let server = MockServer::start();
    let any = server.mock(|_when, then| {
        then.status(200);
    });

    tunnels_cli(&server)
        .args(["delete", "-customer", "bob"])
        .assert()
        .code(1);
    any.assert_hits(0);
}

#[test]
fn unknown_flag_is_rejected_by_parser() {
    let server = MockServer::start();
    let any = server.mock(|_when, then| {
        then.status(200);
    });

    tunnels_cli(&server)
        .args(["get", "-customer", "bob", "-cname", "alice"])
        .assert()
        .code(2);
    any.assert_hits(0);
}

#[test]
fn unknown_subcommand_exits_one() {
    let server = MockServer::start();

    tunnels_cli(&server)
        .arg("remove")
        .assert()
        .code(1)
        .stdout("HELP: 'list', 'get', 'add', 'update' or 'delete' subcommand is required\n");
}
