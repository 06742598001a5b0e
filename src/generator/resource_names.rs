/// Infrastructure-style roster used when the host supplies no names.
pub const DEFAULT_RESOURCE_NAMES: [&str; 68] = [
    "Server-01",
    "Server-02",
    "Server-03",
    "Server-04",
    "Server-05",
    "Server-06",
    "Server-07",
    "Server-08",
    "Server-09",
    "Server-10",
    "Server-11",
    "Server-12",
    "Server-13",
    "Server-14",
    "Server-15",
    "Server-16",
    "Server-17",
    "Server-18",
    "Server-19",
    "Server-20",
    "Database-01",
    "Database-02",
    "Database-03",
    "Database-04",
    "Database-05",
    "Database-06",
    "Database-07",
    "Database-08",
    "Database-09",
    "Database-10",
    "Database-11",
    "Database-12",
    "Cache-01",
    "Cache-02",
    "Cache-03",
    "Cache-04",
    "Cache-05",
    "Cache-06",
    "Cache-07",
    "Cache-08",
    "Worker-01",
    "Worker-02",
    "Worker-03",
    "Worker-04",
    "Worker-05",
    "Worker-06",
    "Worker-07",
    "Worker-08",
    "Worker-09",
    "Worker-10",
    "Worker-11",
    "Worker-12",
    "Worker-13",
    "Worker-14",
    "Worker-15",
    "Worker-16",
    "API-Gateway-01",
    "API-Gateway-02",
    "API-Gateway-03",
    "API-Gateway-04",
    "Load-Balancer-01",
    "Load-Balancer-02",
    "Load-Balancer-03",
    "Load-Balancer-04",
    "Load-Balancer-05",
    "Load-Balancer-06",
    "Load-Balancer-07",
    "Load-Balancer-08",
];
