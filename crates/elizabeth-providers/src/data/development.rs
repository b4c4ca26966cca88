pub const LICENSES: &[&str] = &[
    "Apache License, 2.0 (Apache-2.0)",
    "The BSD 3-Clause License",
    "The BSD 2-Clause License",
    "GNU General Public License (GPL)",
    "General Public License (LGPL)",
    "MIT license (MIT)",
    "Mozilla Public License 2.0 (MPL-2.0)",
    "Common Development and Distribution License (CDDL-1.0)",
    "Eclipse Public License (EPL-1.0)",
];

pub const SQL: &[&str] = &[
    "MariaDB",
    "MySQL",
    "PostgreSQL",
    "Oracle DB",
    "SQLite",
    "Microsoft SQL Server",
];

pub const NOSQL: &[&str] = &[
    "MongoDB",
    "RethinkDB",
    "Couchbase",
    "CouchDB",
    "Aerospike",
    "MemcacheDB",
    "MUMPS",
    "Riak",
    "Redis",
    "AllegroGraph",
    "Neo4J",
    "InfiniteGraph",
];

pub const CONTAINER: &[&str] = &["Docker", "Rkt", "LXC", "OpenVZ", "Vagrant"];

pub const VERSION_CONTROL_SYSTEMS: &[&str] = &["Git", "Subversion"];

pub const PROGRAMMING_LANGS: &[&str] = &[
    "ASP",
    "Assembly",
    "AutoIt",
    "Awk",
    "Bash",
    "C",
    "C Shell",
    "C#",
    "C++",
    "Caml",
    "Ceylon",
    "Clojure",
    "CoffeeScript",
    "Common Lisp",
    "D",
    "Dart",
    "Delphi",
    "Dylan",
    "ECMAScript",
    "Elixir",
    "Emacs Lisp",
    "Erlang",
    "F#",
    "Falcon",
    "Fortran",
    "GNU Octave",
    "Go",
    "Groovy",
    "Haskell",
    "haXe",
    "Io",
    "J#",
    "Java",
    "JavaScript",
    "Julia",
    "Kotlin",
    "Lisp",
    "Lua",
    "Mathematica",
    "Objective-C",
    "OCaml",
    "Perl",
    "PHP",
    "PL-I",
    "PL-SQL",
    "PowerShell",
    "Prolog",
    "Python",
    "R",
    "Racket",
    "Ruby",
    "Rust",
    "Scala",
    "Scheme",
    "Smalltalk",
    "Tcl",
    "Tex",
    "Transact-SQL",
    "TypeScript",
    "Z shell",
];

pub const BACKEND: &[&str] = &[
    "Elixir/Phoenix",
    "Python/Flask",
    "Python/Django",
    "Ruby/Rails",
    "Rust/Actix",
    "Rust/Axum",
    "Go/Gin",
    "Java/Spring",
    "PHP/Laravel",
    "Node.js/Express",
    "Scala/Play",
    "C#/ASP.NET Core",
];

pub const FRONTEND: &[&str] = &[
    "JS/React",
    "JS/Angular",
    "JS/Vue",
    "JS/Svelte",
    "JS/Ember",
    "JS/Backbone",
    "ClojureScript/Reagent",
    "Elm",
    "TypeScript/Angular",
    "Rust/Yew",
];

pub const OS: &[&str] = &[
    "Arch",
    "CentOS",
    "Debian",
    "Fedora",
    "FreeBSD",
    "Gentoo",
    "Kali",
    "Lubuntu",
    "Manjaro",
    "Mint",
    "OS X",
    "OpenBSD",
    "PCLinuxOS",
    "Slackware",
    "Ubuntu",
    "Windows 10",
    "Windows 7",
    "Windows 8",
    "Windows 8.1",
    "Zorin",
    "elementaryOS",
    "macOS",
    "openSUSE",
];

pub const FOLDERS: &[&str] = &[
    "Development",
    "Downloads",
    "Documents",
    "Music",
    "Video",
    "Work",
    "Pictures",
    "Desktop",
    "Study",
];

pub const PROJECT_NAMES: &[&str] = &[
    "aardonyx",
    "abelisaurus",
    "achelousaurus",
    "achillobator",
    "acrocanthosaurus",
    "aegyptosaurus",
    "afrovenator",
    "agilisaurus",
    "alamosaurus",
    "albertaceratops",
    "albertosaurus",
    "alectrosaurus",
    "alioramus",
    "allosaurus",
    "alvarezsaurus",
    "amargasaurus",
    "ammosaurus",
    "ampelosaurus",
    "amygdalodon",
    "anatotitan",
    "anchiceratops",
    "anchisaurus",
    "ankylosaurus",
    "anserimimus",
    "antarctopelta",
    "antarctosaurus",
    "apatosaurus",
    "aragosaurus",
    "aralosaurus",
    "archaeoceratops",
    "archaeopteryx",
    "archaeornithomimus",
    "argentinosaurus",
    "arrhinoceratops",
    "atlascopcosaurus",
    "aucasaurus",
    "austrosaurus",
    "avaceratops",
    "avimimus",
    "bactrosaurus",
    "bagaceratops",
    "brachiosaurus",
    "carnotaurus",
    "deinonychus",
    "diplodocus",
    "stegosaurus",
    "triceratops",
    "velociraptor",
];
