mod dry_run;
